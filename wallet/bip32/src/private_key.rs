use crate::{Error, Group, PrivateKeyBytes, PublicKey, Result};
use once_cell::sync::OnceCell;
use std::fmt::{self, Debug};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// Secret scalar with a write-once cache of its public key.
#[derive(Clone)]
pub struct PrivateKey<G: Group> {
    scalar: G::Scalar,
    public_key: OnceCell<PublicKey<G>>,
}

impl<G: Group> PrivateKey<G> {
    pub(crate) fn from_scalar(scalar: G::Scalar) -> Self {
        PrivateKey { scalar, public_key: OnceCell::new() }
    }

    /// Parse a big endian scalar, which must lie in `[1, r)`.
    pub fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        G::scalar_from_bytes(bytes).map(Self::from_scalar).ok_or(Error::InvalidKey)
    }

    pub fn to_bytes(&self) -> Zeroizing<PrivateKeyBytes> {
        Zeroizing::new(G::scalar_to_bytes(&self.scalar))
    }

    pub fn scalar(&self) -> &G::Scalar {
        &self.scalar
    }

    /// Public key of this scalar, computed on first use.
    ///
    /// Concurrent first calls block on a single initialization and all observe
    /// the same value.
    pub fn public_key(&self) -> &PublicKey<G> {
        self.public_key.get_or_init(|| PublicKey::from_point(G::mul_generator(&self.scalar)))
    }

    /// `self + tweak mod r`
    pub(crate) fn derive_child(&self, tweak: &G::Scalar) -> Result<Self> {
        G::scalar_add(&self.scalar, tweak).map(Self::from_scalar).ok_or(Error::InvalidChild)
    }
}

impl<G: Group> ConstantTimeEq for PrivateKey<G> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl<G: Group> PartialEq for PrivateKey<G> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<G: Group> Eq for PrivateKey<G> {}

impl<G: Group> Debug for PrivateKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}
