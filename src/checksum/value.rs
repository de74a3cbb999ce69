//! Checksum value type.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use super::Encoding;

/// A finalized CRC-64/NVME checksum.
///
/// This is a thin wrapper around the complemented register. Its big-endian
/// bytes, base64-encoded, are what S3 reports for a `CRC64NVME` checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Checksum(u64);

impl Checksum {
    /// Wraps a raw 64-bit value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the checksum as big-endian bytes.
    pub const fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Returns the checksum as 16 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.0)
    }

    /// Returns the checksum as 16 uppercase hex digits.
    pub fn to_hex_upper(&self) -> String {
        format!("{:016X}", self.0)
    }

    /// Returns the padded standard base64 of the big-endian bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use s3crc::Checksum;
    ///
    /// assert_eq!(Checksum::new(0).to_base64(), "AAAAAAAAAAA=");
    /// ```
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.to_be_bytes())
    }

    /// Renders the checksum in the given encoding.
    pub fn encode(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Base64 => self.to_base64(),
            Encoding::Hex => self.to_hex(),
            Encoding::HexUpper => self.to_hex_upper(),
        }
    }

    /// Parses a checksum from hex, either case.
    ///
    /// Returns `None` if the string is not valid hex or not exactly 16 characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != 16 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u64::from_str_radix(hex_str, 16).ok().map(Self)
    }

    /// Parses a checksum from base64, as found in an S3 checksum header.
    ///
    /// Returns `None` unless the input decodes to exactly 8 bytes.
    pub fn from_base64(encoded: &str) -> Option<Self> {
        let decoded = BASE64_STANDARD.decode(encoded).ok()?;
        let bytes: [u8; 8] = decoded.as_slice().try_into().ok()?;
        Some(Self(u64::from_be_bytes(bytes)))
    }
}

impl From<u64> for Checksum {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Checksum> for u64 {
    fn from(sum: Checksum) -> Self {
        sum.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECK: Checksum = Checksum::new(0xae8b_1486_0a79_9888);

    #[test]
    fn test_hex() {
        assert_eq!(CHECK.to_hex(), "ae8b14860a799888");
        assert_eq!(CHECK.to_hex_upper(), "AE8B14860A799888");
        assert_eq!(Checksum::new(1).to_hex(), "0000000000000001");
    }

    #[test]
    fn test_base64() {
        assert_eq!(CHECK.to_base64(), "rosUhgp5mIg=");
        assert_eq!(Checksum::new(0xd5da_5047_efec_8728).to_base64(), "1dpQR+/shyg=");
    }

    #[test]
    fn test_hex_and_base64_agree() {
        let from_b64 = Checksum::from_base64(&CHECK.to_base64()).unwrap();
        let from_hex = Checksum::from_hex(&CHECK.to_hex()).unwrap();
        assert_eq!(from_b64, from_hex);
        assert_eq!(Checksum::from_hex(&CHECK.to_hex_upper()), Some(CHECK));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Checksum::from_hex("ae8b14860a79988").is_none());
        assert!(Checksum::from_hex("ae8b14860a7998888").is_none());
        assert!(Checksum::from_hex("+e8b14860a799888").is_none());
        assert!(Checksum::from_hex("zz8b14860a799888").is_none());
    }

    #[test]
    fn test_from_base64_rejects_wrong_length() {
        assert!(Checksum::from_base64("AAAA").is_none());
        assert!(Checksum::from_base64("not base64!").is_none());
    }

    #[test]
    fn test_display_is_lower_hex() {
        assert_eq!(CHECK.to_string(), "ae8b14860a799888");
    }

    #[test]
    fn test_encode() {
        assert_eq!(CHECK.encode(Encoding::Base64), "rosUhgp5mIg=");
        assert_eq!(CHECK.encode(Encoding::Hex), "ae8b14860a799888");
        assert_eq!(CHECK.encode(Encoding::HexUpper), "AE8B14860A799888");
    }
}
