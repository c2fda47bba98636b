//!
//! Arithmetic capability the derivation engine is built on.
//!
//! A [`Group`] is a prime-order group with a fixed generator `G`, its scalar
//! field of order `r`, and fixed-size encodings for scalars (32 bytes, big
//! endian) and elements (48 bytes, compressed). Implementations are zero-sized
//! marker types selected through [`ExtendedKey`](crate::ExtendedKey)'s type
//! parameter.
//!

use crate::{PrivateKeyBytes, PublicKeyBytes, Result};

pub trait Group: Clone + Send + Sync + 'static {
    type Scalar: Clone + Send + Sync;
    type Point: Clone + Send + Sync;

    /// Interpret `bytes` as a big endian integer `v`, accepted iff `0 < v < r`.
    fn scalar_from_bytes(bytes: &PrivateKeyBytes) -> Option<Self::Scalar>;

    fn scalar_to_bytes(scalar: &Self::Scalar) -> PrivateKeyBytes;

    /// Canonical secret key derivation from input key material.
    fn derive_secret(ikm: &PrivateKeyBytes) -> Result<Self::Scalar>;

    /// `a + b mod r`, `None` when the sum is zero.
    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Option<Self::Scalar>;

    /// `scalar * G`
    fn mul_generator(scalar: &Self::Scalar) -> Self::Point;

    /// Group addition, `None` when the result is the identity.
    fn point_add(a: &Self::Point, b: &Self::Point) -> Option<Self::Point>;

    fn point_to_bytes(point: &Self::Point) -> PublicKeyBytes;

    /// Decompress and validate an element, rejecting the identity.
    fn point_from_bytes(bytes: &PublicKeyBytes) -> Option<Self::Point>;
}
