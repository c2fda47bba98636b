use crate::{ChainCode, ChildNumber, Depth, KeyFingerprint};

/// Position of an extended key in the tree: depth, parent fingerprint,
/// child number and chain code.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ExtendedKeyAttrs {
    /// Depth in the key derivation hierarchy.
    pub depth: Depth,

    /// Fingerprint of the parent public key, zero at the root.
    pub parent_fingerprint: KeyFingerprint,

    /// Index this key was derived at, zero at the root.
    pub child_number: ChildNumber,

    /// Chain code.
    pub chain_code: ChainCode,
}

impl ExtendedKeyAttrs {
    /// Attributes of a master key.
    pub fn root(chain_code: ChainCode) -> Self {
        ExtendedKeyAttrs { chain_code, ..Default::default() }
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}
