//! s3crc
//!
//! Streaming CRC64-NVMe checksums for Rust.
//!
//! `s3crc` folds a byte stream into the reflected CRC-64/NVME checksum, the
//! same value Amazon S3 reports in its `x-amz-checksum-crc64nvme` header. It
//! is designed as a small, composable primitive for:
//!
//! - verifying uploads and downloads against object storage
//! - integrity checks of files and pipes
//! - cheap change detection
//!
//! The core intentionally:
//! - does NOT seek or rewind its input
//! - does NOT hold more than one read buffer per computation
//! - does NOT offer cryptographic guarantees
//!
//! It only does one thing: **Read bytes → yield a 64-bit checksum**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use s3crc::{ChecksumError, Crc64Engine, EngineConfig, Encoding};
//!
//! fn main() -> Result<(), ChecksumError> {
//!     let file = File::open("data.bin")?;
//!     let engine = Crc64Engine::new(EngineConfig::default());
//!
//!     let sum = engine.checksum(file)?;
//!     println!("{}", sum.encode(Encoding::Base64));
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use s3crc::{checksum_async, EngineConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), s3crc::ChecksumError> {
//!     let sum = checksum_async(reader, EngineConfig::default()).await?;
//!     println!("{}", sum.to_hex());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checksum;
mod config;
mod crc;
mod engine;
mod error;

mod buffer; // internal (thread-local reuse)

pub mod batch;
pub mod report;
pub mod source;

#[cfg(feature = "async-io")]
mod async_io;

//
// Public surface
//

pub use checksum::{Checksum, Encoding};
pub use config::{EngineConfig, OutputConfig, OutputFormat};
pub use crc::{CRC64_NVME_TABLE, Crc64, POLY_NVME_REFLECTED, make_table};
pub use engine::Crc64Engine;
pub use error::ChecksumError;

#[cfg(feature = "async-io")]
pub use async_io::{ChecksumFuture, checksum_async};
