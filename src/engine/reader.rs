//! Core streaming engine - Crc64Engine over `std::io::Read`.
//!
//! This module implements the synchronous checksum API. The engine makes a
//! single linear pass over the reader, folding each block into a [`Crc64`]
//! accumulator as soon as it arrives:
//!
//! - `Ok(n)` with `n > 0` - fold `n` bytes, read again
//! - `Ok(0)` - end of stream, finalize
//! - `Err(Interrupted)` - retry the read
//! - any other `Err` - abort, no checksum is produced
//!
//! # Example
//!
//! ```
//! use s3crc::{Crc64Engine, EngineConfig};
//! use std::io::Cursor;
//!
//! let engine = Crc64Engine::new(EngineConfig::default());
//! let sum = engine.checksum(Cursor::new(b"123456789"))?;
//! assert_eq!(sum.to_base64(), "rosUhgp5mIg=");
//! # Ok::<(), s3crc::ChecksumError>(())
//! ```

use std::io::{ErrorKind, Read};

use tracing::trace;

use crate::buffer::Buffer;
use crate::checksum::Checksum;
use crate::config::EngineConfig;
use crate::crc::Crc64;
use crate::error::ChecksumError;

/// A checksum engine that streams readers through a CRC-64/NVME accumulator.
///
/// `Crc64Engine` is cheap to clone and holds no per-computation state, so
/// one engine may be shared across threads; every call owns its own
/// accumulator and read buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc64Engine {
    config: EngineConfig,
}

impl Crc64Engine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use s3crc::{Crc64Engine, EngineConfig};
    ///
    /// let engine = Crc64Engine::new(EngineConfig::new(4096)?);
    /// # Ok::<(), s3crc::ChecksumError>(())
    /// ```
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Computes the checksum of everything `reader` yields until end-of-stream.
    ///
    /// The reader is consumed but never seeked. Closing it is up to the
    /// caller (dropping a `File` passed by value closes it on every path).
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidConfig`] if the engine was built from
    /// an unvalidated config (see [`EngineConfig::with_buffer_size`]), and
    /// [`ChecksumError::Io`] on the first read error other than
    /// [`ErrorKind::Interrupted`]. No partial checksum is returned.
    pub fn checksum<R: Read>(&self, mut reader: R) -> Result<Checksum, ChecksumError> {
        self.config.validate()?;

        let mut buffer = Buffer::take(self.config.buffer_size());
        let mut crc = Crc64::new();
        let mut total = 0u64;

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    crc.update(&buffer[..n]);
                    total += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ChecksumError::Io(e)),
            }
        }

        let sum = crc.finalize();
        trace!(bytes = total, checksum = %sum, "stream exhausted");
        Ok(sum)
    }

    /// Computes the checksum of an in-memory buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use s3crc::Crc64Engine;
    ///
    /// let sum = Crc64Engine::default().checksum_bytes(b"");
    /// assert_eq!(sum.value(), 0);
    /// ```
    pub fn checksum_bytes(&self, data: &[u8]) -> Checksum {
        Crc64::checksum(data)
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
