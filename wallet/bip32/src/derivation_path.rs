//! Derivation paths

use crate::{ChildNumber, Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Root marker every textual path starts with.
const ROOT: &str = "m";

/// Sequence of [`ChildNumber`] steps from a master key, written `m/0'/1/2'`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    /// Iterate over the [`ChildNumber`] values in this derivation path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.0.iter().copied()
    }

    /// The empty path `m`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Path without its last step, `None` for `m`.
    pub fn parent(&self) -> Option<Self> {
        self.0.split_last().map(|(_, parent)| DerivationPath(parent.to_vec()))
    }

    pub fn push(&mut self, child_number: ChildNumber) {
        self.0.push(child_number)
    }

    /// Builder form of [`push`](Self::push).
    pub fn child(mut self, child_number: ChildNumber) -> Self {
        self.push(child_number);
        self
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.0
    }
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        for child_number in self.iter() {
            write!(f, "/{}", child_number)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<DerivationPath> {
        let mut steps = path.split('/');
        if steps.next() != Some(ROOT) {
            return Err(Error::String(format!("derivation path `{path}` does not start with `{ROOT}`")));
        }
        steps.map(str::parse::<ChildNumber>).collect()
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<T: IntoIterator<Item = ChildNumber>>(iter: T) -> Self {
        DerivationPath(iter.into_iter().collect())
    }
}

impl Extend<ChildNumber> for DerivationPath {
    fn extend<T: IntoIterator<Item = ChildNumber>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<DerivationPath, D::Error> {
        let path = String::deserialize(deserializer)?;
        path.parse().map_err(de::Error::custom)
    }
}
