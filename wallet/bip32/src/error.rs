//!
//! Error type for key derivation, serialization and parsing.
//!

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("seed length must be between 128 and 512 bits, got {0} bytes")]
    SeedLength(usize),

    #[error("unusable seed")]
    UnusableSeed,

    #[error("cannot derive a key with more than 255 indices in its path")]
    Depth,

    #[error("cannot derive a hardened key from a public key")]
    HardenedFromPublic,

    #[error("the extended key at this index is invalid")]
    InvalidChild,

    #[error("unable to create private keys from a public extended key")]
    NotPrivateKey,

    #[error("prefix `{0}` does not belong to the expected network")]
    NetworkMismatch(String),

    #[error("unknown network `{0}`")]
    UnknownNetwork(String),

    #[error("invalid key data")]
    InvalidKey,

    #[error("decoded payload is {0} bytes, expected {1}")]
    DecodeLength(usize, usize),

    #[error("invalid child number")]
    ChildNumber,

    #[error("payload checksum mismatch")]
    PayloadChecksum,

    #[error("Bech32 -> {0}")]
    Bech32(#[from] olympus_bech32::Error),

    #[error("decoding error")]
    Decode,

    #[error("HMAC key length is invalid")]
    Hmac,

    #[error("HKDF output length is invalid")]
    Hkdf,

    #[error("{0}")]
    String(String),
}

impl Error {
    /// The input was structurally valid but one of its checksums failed, i.e. it was corrupted.
    pub fn is_checksum_failure(&self) -> bool {
        match self {
            Error::PayloadChecksum => true,
            Error::Bech32(err) => err.is_checksum_failure(),
            _ => false,
        }
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Decode
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(_: hmac::digest::InvalidLength) -> Error {
        Error::Hmac
    }
}

impl From<hkdf::InvalidLength> for Error {
    fn from(_: hkdf::InvalidLength) -> Error {
        Error::Hkdf
    }
}
