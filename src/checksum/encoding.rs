//! Text encodings for checksum output.

use std::fmt;
use std::str::FromStr;

use crate::error::ChecksumError;

/// How a [`Checksum`](super::Checksum) is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Standard padded base64 of the big-endian bytes (S3 header form).
    #[default]
    Base64,
    /// 16 lowercase hex digits.
    Hex,
    /// 16 uppercase hex digits.
    HexUpper,
}

impl Encoding {
    /// Picks an encoding from the `--hex` / `--uppercase` flag pair.
    ///
    /// `hex` wins when both are set; neither selects base64.
    ///
    /// # Example
    ///
    /// ```
    /// use s3crc::Encoding;
    ///
    /// assert_eq!(Encoding::from_flags(true, true), Encoding::Hex);
    /// assert_eq!(Encoding::from_flags(false, true), Encoding::HexUpper);
    /// assert_eq!(Encoding::from_flags(false, false), Encoding::Base64);
    /// ```
    pub const fn from_flags(hex: bool, uppercase: bool) -> Self {
        if hex {
            Self::Hex
        } else if uppercase {
            Self::HexUpper
        } else {
            Self::Base64
        }
    }

    /// Returns the canonical name of the encoding.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Hex => "hex",
            Self::HexUpper => "hex-upper",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            "hex-upper" => Ok(Self::HexUpper),
            _ => Err(ChecksumError::InvalidConfig {
                message: "encoding must be one of: base64, hex, hex-upper",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_base64() {
        assert_eq!(Encoding::default(), Encoding::Base64);
    }

    #[test]
    fn test_parse_round_trip() {
        for enc in [Encoding::Base64, Encoding::Hex, Encoding::HexUpper] {
            assert_eq!(enc.as_str().parse::<Encoding>().unwrap(), enc);
        }
        assert!("crc".parse::<Encoding>().is_err());
    }
}
