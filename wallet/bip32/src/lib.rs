//!
//! Hierarchical deterministic keys for Olympus.
//!
//! A master [`ExtendedKey`] is created from a seed with [`ExtendedKey::new_master`],
//! children are derived with [`ExtendedKey::child`] or along a [`DerivationPath`],
//! and keys are exported as bech32 extended keys, addresses and WIF strings
//! tagged with the [`Prefixes`] of a [`Network`].
//!
//! The engine is generic over the [`Group`] it derives in; [`Bls12381`] (G1 of
//! the BLS12-381 pairing curve) is the default.
//!

mod address;
mod attrs;
mod bls;
mod child_number;
mod derivation_path;
mod error;
mod extended_key;
mod group;
mod hash;
mod network;
mod private_key;
mod public_key;
mod result;
mod seed;
#[cfg(test)]
mod toy;
pub mod types;
mod xkey;

pub use address::{ADDRESS_PAYLOAD_SIZE, WIF_PAYLOAD_SIZE, decode_address, decode_wif};
pub use attrs::ExtendedKeyAttrs;
pub use bls::Bls12381;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use error::Error;
pub use extended_key::{ExtendedKey, Key};
pub use group::Group;
pub use hash::{hash160, payload_checksum};
pub use network::{Network, Prefixes};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use result::Result;
pub use seed::Seed;
pub use types::*;
pub use xkey::{PRIVATE_PAYLOAD_SIZE, PUBLIC_PAYLOAD_SIZE};
