#![no_main]

use std::io::{self, Read};

use libfuzzer_sys::fuzz_target;
use s3crc::{Crc64, Crc64Engine, EngineConfig};

/// Hands out the input in read sizes chosen by the fuzzer.
struct Uneven<'a> {
    data: &'a [u8],
    sizes: &'a [u8],
    calls: usize,
}

impl Read for Uneven<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let step = self
            .sizes
            .get(self.calls % self.sizes.len().max(1))
            .map_or(1, |&s| s as usize + 1);
        self.calls += 1;
        let n = step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|input: (Vec<u8>, Vec<u8>, u16)| {
    let (data, sizes, buffer_size) = input;
    let config = EngineConfig::new(buffer_size as usize + 1).unwrap();
    let engine = Crc64Engine::new(config);

    let reader = Uneven {
        data: &data,
        sizes: &sizes,
        calls: 0,
    };

    // Verify: read chunking and buffer size never change the result
    assert_eq!(engine.checksum(reader).unwrap(), Crc64::checksum(&data));
});
