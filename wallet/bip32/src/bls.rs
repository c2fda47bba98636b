//!
//! BLS12-381 G1 backend.
//!

use crate::{Group, KEY_SIZE, PUBLIC_KEY_SIZE, PrivateKeyBytes, PublicKeyBytes, Result};
use ark_bls12_381::{Fr, G1Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

/// Initial HKDF salt of the BLS `KeyGen` procedure.
const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

/// `ceil((3 * ceil(log2(r))) / 16)`
const KEYGEN_OKM_LENGTH: usize = 48;

/// G1 of the BLS12-381 pairing curve, elements in the 48-byte zcash compressed encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381;

impl Group for Bls12381 {
    type Scalar = Fr;
    type Point = G1Affine;

    fn scalar_from_bytes(bytes: &PrivateKeyBytes) -> Option<Fr> {
        let modulus = Fr::MODULUS.to_bytes_be();
        if bytes.iter().all(|b| *b == 0) || bytes[..] >= modulus[..] {
            return None;
        }
        Some(Fr::from_be_bytes_mod_order(bytes))
    }

    fn scalar_to_bytes(scalar: &Fr) -> PrivateKeyBytes {
        let mut encoded = scalar.into_bigint().to_bytes_be();
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&encoded);
        encoded.zeroize();
        bytes
    }

    fn derive_secret(ikm: &PrivateKeyBytes) -> Result<Fr> {
        let mut material = Zeroizing::new([0u8; KEY_SIZE + 1]);
        material[..KEY_SIZE].copy_from_slice(ikm);
        let info = (KEYGEN_OKM_LENGTH as u16).to_be_bytes();

        let mut salt = Sha256::digest(KEYGEN_SALT);
        loop {
            let hkdf = Hkdf::<Sha256>::new(Some(&salt[..]), &material[..]);
            let mut okm = Zeroizing::new([0u8; KEYGEN_OKM_LENGTH]);
            hkdf.expand(&info, &mut okm[..])?;

            let secret = Fr::from_be_bytes_mod_order(&okm[..]);
            if !secret.is_zero() {
                return Ok(secret);
            }
            salt = Sha256::digest(salt);
        }
    }

    fn scalar_add(a: &Fr, b: &Fr) -> Option<Fr> {
        let sum = *a + *b;
        (!sum.is_zero()).then_some(sum)
    }

    fn mul_generator(scalar: &Fr) -> G1Affine {
        (G1Affine::generator() * scalar).into_affine()
    }

    fn point_add(a: &G1Affine, b: &G1Affine) -> Option<G1Affine> {
        let sum = (a.into_group() + b).into_affine();
        (!sum.is_zero()).then_some(sum)
    }

    fn point_to_bytes(point: &G1Affine) -> PublicKeyBytes {
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        // the compressed encoding is exactly PUBLIC_KEY_SIZE bytes
        let written = point.serialize_compressed(&mut bytes[..]);
        debug_assert!(written.is_ok(), "compressed G1 encoding must fit {PUBLIC_KEY_SIZE} bytes");
        bytes
    }

    fn point_from_bytes(bytes: &PublicKeyBytes) -> Option<G1Affine> {
        G1Affine::deserialize_compressed(&bytes[..]).ok().filter(|point| !point.is_zero())
    }
}
