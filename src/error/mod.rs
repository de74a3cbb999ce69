//! Error types for s3crc.

use std::fmt;

/// Errors that can occur while checksumming input sources.
#[derive(Debug)]
pub enum ChecksumError {
    /// An I/O error occurred while reading an unlabelled reader.
    Io(std::io::Error),

    /// The input source could not be opened.
    Unavailable {
        /// Label of the source (path or `stdin`).
        label: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Reading failed before the source signalled end-of-stream.
    Read {
        /// Label of the source (path or `stdin`).
        label: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A glob pattern could not be parsed.
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why the pattern is invalid.
        message: String,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl ChecksumError {
    /// Attaches a source label to an unlabelled read error.
    ///
    /// Errors that already carry a label are returned unchanged.
    pub fn with_label(self, label: &str) -> Self {
        match self {
            ChecksumError::Io(source) => ChecksumError::Read {
                label: label.to_owned(),
                source,
            },
            other => other,
        }
    }

    /// Returns the label of the source this error is attributed to, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            ChecksumError::Unavailable { label, .. } | ChecksumError::Read { label, .. } => {
                Some(label)
            }
            ChecksumError::InvalidPattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumError::Io(e) => write!(f, "io error: {}", e),
            ChecksumError::Unavailable { label, source } => {
                write!(f, "cannot open {}: {}", label, source)
            }
            ChecksumError::Read { label, source } => {
                write!(f, "read failed on {}: {}", label, source)
            }
            ChecksumError::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern {}: {}", pattern, message)
            }
            ChecksumError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ChecksumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChecksumError::Io(e) => Some(e),
            ChecksumError::Unavailable { source, .. } | ChecksumError::Read { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChecksumError {
    fn from(e: std::io::Error) -> Self {
        ChecksumError::Io(e)
    }
}
