//! Child numbers

use crate::{Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Index of a particular child key for a given (extended) private key.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child keys use indices 2^31 through 2^32-1.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create new [`ChildNumber`] with the given index and hardened flag.
    ///
    /// Returns an error if the index is already in the hardened range.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG == 0 {
            let mut child = index;
            if hardened {
                child |= Self::HARDENED_FLAG;
            }
            Ok(ChildNumber(child))
        } else {
            Err(Error::ChildNumber)
        }
    }

    /// Parse a child number from the 4-byte big endian wire form.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        u32::from_be_bytes(bytes).into()
    }

    /// Serialize this child number as 4 big endian bytes.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Get the index without the hardened flag.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        let (child, hardened) = match child.strip_suffix(['\'', 'h', 'H']) {
            Some(index) => (index, true),
            None => (child, false),
        };

        let index = child.parse().map_err(|_| Error::ChildNumber)?;
        ChildNumber::new(index, hardened)
    }
}
