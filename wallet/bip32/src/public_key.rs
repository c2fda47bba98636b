use crate::{Error, Group, Hash160, KeyFingerprint, PublicKeyBytes, Result, hash::hash160};
use std::fmt::{self, Debug};

/// Group element together with its compressed encoding.
#[derive(Clone)]
pub struct PublicKey<G: Group> {
    point: G::Point,
    bytes: PublicKeyBytes,
}

impl<G: Group> PublicKey<G> {
    pub(crate) fn from_point(point: G::Point) -> Self {
        let bytes = G::point_to_bytes(&point);
        PublicKey { point, bytes }
    }

    /// Decompress and validate an encoded element.
    pub fn from_bytes(bytes: &PublicKeyBytes) -> Result<Self> {
        let point = G::point_from_bytes(bytes).ok_or(Error::InvalidKey)?;
        Ok(PublicKey { point, bytes: *bytes })
    }

    pub fn to_bytes(&self) -> PublicKeyBytes {
        self.bytes
    }

    pub fn point(&self) -> &G::Point {
        &self.point
    }

    /// RIPEMD160(SHA256(..)) of the compressed encoding.
    pub fn hash160(&self) -> Hash160 {
        hash160(&self.bytes)
    }

    /// Compute a 4-byte key fingerprint for this public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        let mut fingerprint = KeyFingerprint::default();
        fingerprint.copy_from_slice(&self.hash160()[..4]);
        fingerprint
    }

    /// `tweak * G + self`
    pub(crate) fn derive_child(&self, tweak: &G::Scalar) -> Result<Self> {
        let point = G::point_add(&G::mul_generator(tweak), &self.point).ok_or(Error::InvalidChild)?;
        Ok(Self::from_point(point))
    }
}

impl<G: Group> PartialEq for PublicKey<G> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<G: Group> Eq for PublicKey<G> {}

impl<G: Group> Debug for PublicKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&hex::encode(self.bytes)).finish()
    }
}
