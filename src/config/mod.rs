//! Configuration for checksum computation and output.
//!
//! This module provides types to configure how checksums are computed and
//! reported:
//!
//! - [`EngineConfig`] - Controls the read buffer used by the streaming loop
//! - [`OutputConfig`] - Selects the text encoding and result layout
//!
//! # Example
//!
//! ```
//! use s3crc::{EngineConfig, Encoding, OutputConfig, OutputFormat};
//!
//! // Smaller read buffer
//! let config = EngineConfig::new(4096)?;
//!
//! // Uppercase hex, JSON array
//! let output = OutputConfig::default()
//!     .with_encoding(Encoding::HexUpper)
//!     .with_format(OutputFormat::Json);
//!
//! # Ok::<(), s3crc::ChecksumError>(())
//! ```

use crate::checksum::Encoding;
use crate::error::ChecksumError;

/// Default read buffer size (32 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Largest accepted read buffer size (16 MiB).
pub const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for the streaming checksum engine.
///
/// The buffer size trades syscall count against memory. It never affects
/// the checksum value.
///
/// # Example
///
/// ```
/// use s3crc::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.buffer_size(), 32 * 1024);
///
/// let config = EngineConfig::default().with_buffer_size(0);
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Read buffer capacity in bytes.
    buffer_size: usize,
}

impl EngineConfig {
    /// Creates a new configuration with the given read buffer size.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidConfig`] if `buffer_size` is zero or
    /// larger than [`MAX_BUFFER_SIZE`].
    pub fn new(buffer_size: usize) -> Result<Self, ChecksumError> {
        if buffer_size == 0 {
            return Err(ChecksumError::InvalidConfig {
                message: "buffer_size must be non-zero",
            });
        }

        if buffer_size > MAX_BUFFER_SIZE {
            return Err(ChecksumError::InvalidConfig {
                message: "buffer_size cannot exceed 16 MiB",
            });
        }

        Ok(Self { buffer_size })
    }

    /// Sets the read buffer size.
    ///
    /// Note: This does not validate the configuration. Use [`EngineConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Returns the read buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChecksumError> {
        Self::new(self.buffer_size).map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Layout of a batch of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// One `<encoded>  <label>` line per result.
    #[default]
    Text,
    /// A pretty-printed JSON array of `{"file", "crc64"}` objects.
    Json,
}

/// Configuration for rendering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutputConfig {
    /// Text encoding of each checksum.
    pub encoding: Encoding,
    /// Layout of the whole batch.
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Creates an output configuration.
    pub const fn new(encoding: Encoding, format: OutputFormat) -> Self {
        Self { encoding, format }
    }

    /// Sets the encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_buffer_size(8192);
        assert_eq!(config.buffer_size(), 8192);
    }

    #[test]
    fn test_invalid_config_zero_size() {
        assert!(EngineConfig::new(0).is_err());
    }

    #[test]
    fn test_invalid_config_too_large() {
        assert!(EngineConfig::new(MAX_BUFFER_SIZE + 1).is_err());
        assert!(EngineConfig::new(MAX_BUFFER_SIZE).is_ok());
    }

    #[test]
    fn test_output_config() {
        let output = OutputConfig::default();
        assert_eq!(output.encoding, Encoding::Base64);
        assert_eq!(output.format, OutputFormat::Text);

        let output = output.with_format(OutputFormat::Json).with_encoding(Encoding::Hex);
        assert_eq!(output, OutputConfig::new(Encoding::Hex, OutputFormat::Json));
    }
}
