//! Checksum results and their text encodings.
//!
//! - [`Checksum`] - A finalized 64-bit CRC value
//! - [`Encoding`] - Hex, uppercase hex, or base64 rendering

mod encoding;
mod value;

pub use encoding::Encoding;
pub use value::Checksum;
