//! Input sources and command-line pattern expansion.
//!
//! - [`InputSource`] - Standard input or a file path, with its report label
//! - [`expand_patterns`] - Turns `-` and glob patterns into ordered sources
//!
//! The engine never sees paths; this module opens each source, hands the
//! reader over, and tags any failure with the source's label.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::checksum::Checksum;
use crate::engine::Crc64Engine;
use crate::error::ChecksumError;

/// Command-line argument selecting standard input.
pub const STDIN_ARG: &str = "-";

/// Label reported for standard input.
pub const STDIN_LABEL: &str = "stdin";

/// A byte source to checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// The process's standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Interprets a single command-line argument without glob expansion.
    ///
    /// # Example
    ///
    /// ```
    /// use s3crc::source::InputSource;
    ///
    /// assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
    /// assert_eq!(InputSource::from_arg("a.bin").label(), "a.bin");
    /// ```
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Returns the label used in reports and error messages.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => STDIN_LABEL.to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Opens the source for reading.
    ///
    /// The returned reader owns the handle; dropping it releases the file.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::Unavailable`] if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn Read>, ChecksumError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => File::open(path)
                .map(|file| Box::new(file) as Box<dyn Read>)
                .map_err(|source| ChecksumError::Unavailable {
                    label: self.label(),
                    source,
                }),
        }
    }

    /// Opens the source and streams it through `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::Unavailable`] if the source cannot be opened
    /// and [`ChecksumError::Read`] if reading fails mid-stream.
    pub fn checksum(&self, engine: &Crc64Engine) -> Result<Checksum, ChecksumError> {
        self.checksum_reader(engine, self.open()?)
    }

    fn checksum_reader<R: Read>(
        &self,
        engine: &Crc64Engine,
        reader: R,
    ) -> Result<Checksum, ChecksumError> {
        let sum = engine
            .checksum(reader)
            .map_err(|e| e.with_label(&self.label()))?;
        debug!(source = %self, checksum = %sum, "checksummed");
        Ok(sum)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_LABEL),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Expands command-line patterns into sources, preserving argument order.
///
/// `-` becomes [`InputSource::Stdin`]. Every other argument is a glob
/// pattern whose matches are returned in the order `glob` yields them.
/// A pattern that matches nothing contributes no entries and is logged at
/// warn level.
///
/// Each entry is either a source or a failure attributed to a pattern or
/// path; one bad pattern never hides the others.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<Result<InputSource, ChecksumError>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if pattern == STDIN_ARG {
            sources.push(Ok(InputSource::Stdin));
            continue;
        }

        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(e) => {
                sources.push(Err(ChecksumError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    message: e.to_string(),
                }));
                continue;
            }
        };

        let before = sources.len();
        for entry in paths {
            sources.push(match entry {
                Ok(path) => Ok(InputSource::File(path)),
                Err(e) => Err(ChecksumError::Unavailable {
                    label: e.path().display().to_string(),
                    source: e.into_error(),
                }),
            });
        }

        if sources.len() == before {
            warn!("no files match pattern {}", pattern);
        }
    }

    sources
}
