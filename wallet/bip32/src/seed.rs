//! Seed values

use crate::{Error, MAX_SEED_BYTES, MIN_SEED_BYTES, Result};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

/// Raw seed bytes a master key is created from.
///
/// Mnemonic phrases and key stretching are left to the caller, this type only
/// accepts or generates the final bytes.
pub struct Seed(Vec<u8>);

impl Seed {
    /// Generate `len` bytes from the operating system RNG.
    pub fn generate(len: usize) -> Result<Self> {
        Self::check_len(len)?;
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        Ok(Seed(bytes))
    }

    /// Wrap externally produced seed bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::check_len(bytes.len())?;
        Ok(Seed(bytes.to_vec()))
    }

    fn check_len(len: usize) -> Result<()> {
        if (MIN_SEED_BYTES..=MAX_SEED_BYTES).contains(&len) { Ok(()) } else { Err(Error::SeedLength(len)) }
    }

    /// Get the inner secret byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
