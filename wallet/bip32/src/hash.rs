use crate::Hash160;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of the payload checksum carried by addresses and WIF strings.
pub const PAYLOAD_CHECKSUM_SIZE: usize = 4;

/// RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> Hash160 {
    let mut hash = Hash160::default();
    hash.copy_from_slice(&Ripemd160::digest(Sha256::digest(data)));
    hash
}

/// First four bytes of SHA256(SHA256(data)).
pub fn payload_checksum(data: &[u8]) -> [u8; PAYLOAD_CHECKSUM_SIZE] {
    let mut checksum = [0u8; PAYLOAD_CHECKSUM_SIZE];
    checksum.copy_from_slice(&Sha256::digest(Sha256::digest(data))[..PAYLOAD_CHECKSUM_SIZE]);
    checksum
}
