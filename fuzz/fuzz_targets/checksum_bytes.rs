#![no_main]

use libfuzzer_sys::fuzz_target;
use s3crc::{Checksum, Crc64};

fuzz_target!(|data: Vec<u8>| {
    let expected = Crc64::checksum(&data);

    // Verify: any two-way split folds to the same value
    let split = data.first().map_or(0, |&b| b as usize % (data.len() + 1));
    let mut crc = Crc64::new();
    crc.update(&data[..split]);
    crc.update(&data[split..]);
    assert_eq!(crc.finalize(), expected);

    // Verify: byte-at-a-time matches
    let mut crc = Crc64::new();
    for byte in &data {
        crc.update(std::slice::from_ref(byte));
    }
    assert_eq!(crc.finalize(), expected);

    // Verify: hex and base64 encode the same value
    assert_eq!(Checksum::from_base64(&expected.to_base64()), Some(expected));
    assert_eq!(Checksum::from_hex(&expected.to_hex()), Some(expected));
});
