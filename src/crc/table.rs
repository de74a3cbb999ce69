//! Reflected CRC64 lookup table.

use once_cell::sync::Lazy;

/// The NVMe CRC64 generator polynomial in reflected (LSB-first) form.
///
/// The unreflected form is `0xAD93D23594C93659`. Bytes are processed
/// LSB-first, so only the reflected constant yields S3-compatible values.
pub const POLY_NVME_REFLECTED: u64 = 0x9A6C9329AC4BC9B5;

/// Process-wide CRC-64/NVME table, built on first use and never mutated.
pub static CRC64_NVME_TABLE: Lazy<[u64; 256]> = Lazy::new(|| make_table(POLY_NVME_REFLECTED));

/// Builds the 256-entry lookup table for a reflected polynomial.
///
/// Entry `i` is the register obtained by shifting `i` right eight times,
/// XOR-ing in `poly` whenever a set bit falls off the low end.
///
/// # Example
///
/// ```
/// use s3crc::{make_table, POLY_NVME_REFLECTED};
///
/// let table = make_table(POLY_NVME_REFLECTED);
/// assert_eq!(table[0], 0);
/// assert_eq!(table[128], POLY_NVME_REFLECTED);
/// ```
pub fn make_table(poly: u64) -> [u64; 256] {
    let mut table = [0u64; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        let mut crc = i as u64;
        for _ in 0..8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
        }
        *slot = crc;
    }
    table
}
