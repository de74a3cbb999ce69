//! Incremental CRC-64/NVME accumulator.

use super::table::CRC64_NVME_TABLE;
use crate::checksum::Checksum;

/// Initial register value; also the final XOR mask.
const INIT: u64 = !0;

/// A running CRC-64/NVME computation.
///
/// The register is seeded with all ones, folded one byte at a time through
/// the shared table, and complemented on [`Crc64::finalize`]. The raw
/// register is never exposed.
///
/// # Example
///
/// ```
/// use s3crc::Crc64;
///
/// let mut crc = Crc64::new();
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize().value(), 0xae8b_1486_0a79_9888);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc64 {
    state: u64,
}

impl Crc64 {
    /// Creates a new accumulator seeded with all ones.
    pub fn new() -> Self {
        Self { state: INIT }
    }

    /// Folds more data into the register.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        let table = &*CRC64_NVME_TABLE;
        let mut crc = self.state;
        for &byte in data {
            crc = table[((crc as u8) ^ byte) as usize] ^ (crc >> 8);
        }
        self.state = crc;
    }

    /// Returns the checksum of everything fed so far.
    ///
    /// The accumulator is left untouched, so more data may follow.
    pub fn finalize(&self) -> Checksum {
        Checksum::new(self.state ^ INIT)
    }

    /// Resets the accumulator to its initial state.
    pub fn reset(&mut self) {
        self.state = INIT;
    }

    /// Convenience method to checksum data in one shot.
    pub fn checksum(data: &[u8]) -> Checksum {
        let mut crc = Self::new();
        crc.update(data);
        crc.finalize()
    }
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(Crc64::checksum(b"").value(), 0);
        assert_eq!(Crc64::new().finalize().value(), 0);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(Crc64::checksum(&[0x00]).value(), 0xd5da_5047_efec_8728);
        assert_eq!(Crc64::checksum(b"123456789").value(), 0xae8b_1486_0a79_9888);
        assert_eq!(Crc64::checksum(b"hello world").value(), 0x8d29_d5c3_f6ea_8ebe);
    }

    #[test]
    fn test_incremental_matches_oneshot() {
        let data = b"The quick brown fox jumps over the lazy dog";

        for split in 0..=data.len() {
            let mut crc = Crc64::new();
            crc.update(&data[..split]);
            crc.update(&data[split..]);
            assert_eq!(crc.finalize(), Crc64::checksum(data));
        }
    }

    #[test]
    fn test_finalize_does_not_consume() {
        let mut crc = Crc64::new();
        crc.update(b"1234");
        let partial = crc.finalize();
        assert_eq!(partial, Crc64::checksum(b"1234"));

        crc.update(b"56789");
        assert_eq!(crc.finalize(), Crc64::checksum(b"123456789"));
    }

    #[test]
    fn test_reset() {
        let mut crc = Crc64::new();
        crc.update(b"some data");

        crc.reset();
        crc.update(b"hello world");

        assert_eq!(crc.finalize(), Crc64::checksum(b"hello world"));
    }
}
