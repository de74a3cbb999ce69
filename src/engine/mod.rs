//! Streaming checksum engine.
//!
//! - [`Crc64Engine`] - Folds any [`std::io::Read`] source into a checksum

mod reader;

pub use reader::Crc64Engine;
