//!
//! Bech32 text encoding used for Olympus extended keys, addresses and WIF strings.
//!
//! A bech32 string is `<prefix>1<data><checksum>`, where the data part carries the
//! payload regrouped into 5-bit symbols and the six trailing symbols hold a BCH
//! checksum bound to the prefix. Unlike segwit addresses there is no witness
//! version and no overall length cap, since serialized extended keys are well
//! beyond 90 characters.
//!

use thiserror::Error;

mod charset;
mod checksum;
mod squash;

pub use charset::{from_chars, to_chars};
pub use checksum::{CHECKSUM_LENGTH, create_checksum, verify_checksum};
pub use squash::{bytes_5_to_8, bytes_8_to_5, squash};

/// Separator between the human-readable prefix and the data part.
pub const SEPARATOR: char = '1';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("value {value:#04x} at index {index} does not fit in {width} bits")]
    InvalidInput { index: usize, value: u8, width: u32 },

    #[error("invalid padding converting from {from} to {to} bits")]
    InvalidPadding { from: u32, to: u32 },

    #[error("unsupported group width conversion {from} -> {to}")]
    UnsupportedWidth { from: u32, to: u32 },

    #[error("Invalid character {0}")]
    InvalidCharacter(char),

    #[error("string mixes upper and lower case characters")]
    MixedCase,

    #[error("separator '1' is missing")]
    MissingSeparator,

    #[error("Invalid prefix {0}")]
    InvalidPrefix(String),

    #[error("data part too short: {0} symbols")]
    InvalidLength(usize),

    #[error("Checksum is invalid")]
    BadChecksum,
}

impl Error {
    /// The text was well formed but its checksum does not match, i.e. it was corrupted.
    pub fn is_checksum_failure(&self) -> bool {
        matches!(self, Error::BadChecksum)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that `prefix` can stand before the separator: non-empty, printable
/// ASCII and no uppercase letters.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || !prefix.bytes().all(|b| (33..=126).contains(&b) && !b.is_ascii_uppercase()) {
        return Err(Error::InvalidPrefix(prefix.to_string()));
    }
    Ok(())
}

/// Encode `payload` bytes under `prefix`.
pub fn encode(prefix: &str, payload: &[u8]) -> Result<String> {
    encode_squashed(prefix, &bytes_8_to_5(payload))
}

/// Encode data that is already split into 5-bit groups.
pub fn encode_squashed(prefix: &str, groups: &[u8]) -> Result<String> {
    validate_prefix(prefix)?;
    let checksum = create_checksum(prefix, groups);
    let data = to_chars(groups)?;
    let checksum = to_chars(&checksum)?;

    let mut text = String::with_capacity(prefix.len() + 1 + data.len() + CHECKSUM_LENGTH);
    text.push_str(prefix);
    text.push(SEPARATOR);
    text.push_str(&data);
    text.push_str(&checksum);
    Ok(text)
}

/// Decode a bech32 string into its (lowercase) prefix and payload bytes.
pub fn decode(text: &str) -> Result<(String, Vec<u8>)> {
    let (prefix, groups) = decode_squashed(text)?;
    Ok((prefix, bytes_5_to_8(&groups)?))
}

/// Decode a bech32 string into its (lowercase) prefix and 5-bit payload groups,
/// with the checksum verified and stripped.
pub fn decode_squashed(text: &str) -> Result<(String, Vec<u8>)> {
    // case is checked on the raw input before anything else looks at it
    if text.chars().any(|c| c.is_ascii_lowercase()) && text.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Error::MixedCase);
    }
    let text = text.to_ascii_lowercase();

    // the prefix itself may contain '1'
    let position = text.rfind(SEPARATOR).ok_or(Error::MissingSeparator)?;
    let (prefix, data) = (&text[..position], &text[position + 1..]);
    validate_prefix(prefix)?;

    let mut groups = from_chars(data)?;
    if groups.len() < CHECKSUM_LENGTH {
        return Err(Error::InvalidLength(groups.len()));
    }
    if !verify_checksum(prefix, &groups) {
        return Err(Error::BadChecksum);
    }
    groups.truncate(groups.len() - CHECKSUM_LENGTH);

    Ok((prefix.to_string(), groups))
}
