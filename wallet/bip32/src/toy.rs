//! Toy [`Group`] for exercising the derivation engine without pairing-curve cost.

use crate::{Error, Group, KEY_SIZE, PUBLIC_KEY_SIZE, PrivateKeyBytes, PublicKeyBytes, Result};
use num_bigint::BigUint;

/// Integers modulo the prime `2^256 - 189` under addition, generated by 7.
///
/// Scalars and elements are both residues; `scalar * G` is plain modular
/// multiplication. Elements are encoded as 48 big endian bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToyGroup;

const GENERATOR: u32 = 7;

fn order() -> BigUint {
    (BigUint::from(1u8) << 256u32) - 189u32
}

fn non_zero(value: BigUint) -> Option<BigUint> {
    (value.bits() > 0).then_some(value)
}

fn to_fixed<const N: usize>(value: &BigUint) -> [u8; N] {
    let bytes = value.to_bytes_be();
    let mut fixed = [0u8; N];
    fixed[N - bytes.len()..].copy_from_slice(&bytes);
    fixed
}

impl Group for ToyGroup {
    type Scalar = BigUint;
    type Point = BigUint;

    fn scalar_from_bytes(bytes: &PrivateKeyBytes) -> Option<BigUint> {
        non_zero(BigUint::from_bytes_be(bytes)).filter(|value| *value < order())
    }

    fn scalar_to_bytes(scalar: &BigUint) -> PrivateKeyBytes {
        to_fixed::<KEY_SIZE>(scalar)
    }

    fn derive_secret(ikm: &PrivateKeyBytes) -> Result<BigUint> {
        non_zero(BigUint::from_bytes_be(ikm) % order()).ok_or(Error::UnusableSeed)
    }

    fn scalar_add(a: &BigUint, b: &BigUint) -> Option<BigUint> {
        non_zero((a + b) % order())
    }

    fn mul_generator(scalar: &BigUint) -> BigUint {
        scalar * GENERATOR % order()
    }

    fn point_add(a: &BigUint, b: &BigUint) -> Option<BigUint> {
        non_zero((a + b) % order())
    }

    fn point_to_bytes(point: &BigUint) -> PublicKeyBytes {
        to_fixed::<PUBLIC_KEY_SIZE>(point)
    }

    fn point_from_bytes(bytes: &PublicKeyBytes) -> Option<BigUint> {
        non_zero(BigUint::from_bytes_be(bytes)).filter(|value| *value < order())
    }
}
