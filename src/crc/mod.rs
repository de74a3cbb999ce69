//! CRC-64/NVME primitives.
//!
//! - [`make_table`] / [`CRC64_NVME_TABLE`] - Reflected lookup table
//! - [`Crc64`] - Incremental accumulator with `update()`/`finalize()`

mod digest;
mod table;

pub use digest::Crc64;
pub use table::{CRC64_NVME_TABLE, POLY_NVME_REFLECTED, make_table};
