//!
//! Pay-to-public-key-hash addresses and wallet import format (WIF) strings.
//!
//! Both carry a four byte double SHA-256 checksum inside the payload, under the
//! bech32 checksum of the text form.
//!

use crate::{
    Error, Group, Hash160, KEY_SIZE, PrivateKeyBytes, Result,
    hash::{PAYLOAD_CHECKSUM_SIZE, payload_checksum},
    network::Prefixes,
};
use zeroize::Zeroizing;

/// Hash160 plus payload checksum.
pub const ADDRESS_PAYLOAD_SIZE: usize = 20 + PAYLOAD_CHECKSUM_SIZE;

/// Scalar plus payload checksum.
pub const WIF_PAYLOAD_SIZE: usize = KEY_SIZE + PAYLOAD_CHECKSUM_SIZE;

fn encode_checked(prefix: &str, body: &[u8]) -> Result<Zeroizing<String>> {
    let mut payload = Zeroizing::new(Vec::with_capacity(body.len() + PAYLOAD_CHECKSUM_SIZE));
    payload.extend_from_slice(body);
    payload.extend_from_slice(&payload_checksum(body));
    Ok(Zeroizing::new(olympus_bech32::encode(prefix, &payload)?))
}

/// Decode `text` under `prefix` and return the body with the payload checksum verified and stripped.
fn decode_checked(text: &str, prefix: &str, expected_len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let (decoded_prefix, payload) = olympus_bech32::decode(text)?;
    let mut payload = Zeroizing::new(payload);
    if decoded_prefix != prefix {
        return Err(Error::NetworkMismatch(decoded_prefix));
    }
    if payload.len() != expected_len {
        return Err(Error::DecodeLength(payload.len(), expected_len));
    }

    let body_len = expected_len - PAYLOAD_CHECKSUM_SIZE;
    if payload_checksum(&payload[..body_len])[..] != payload[body_len..] {
        return Err(Error::PayloadChecksum);
    }
    payload.truncate(body_len);
    Ok(payload)
}

pub(crate) fn encode_address(hash: &Hash160, prefixes: &Prefixes) -> Result<String> {
    let text = encode_checked(prefixes.address(), hash)?;
    Ok(text.as_str().to_owned())
}

/// Parse an address of the network described by `prefixes` back into the public key hash.
pub fn decode_address(text: &str, prefixes: &Prefixes) -> Result<Hash160> {
    let body = decode_checked(text, prefixes.address(), ADDRESS_PAYLOAD_SIZE)?;
    Ok(body[..].try_into()?)
}

pub(crate) fn encode_wif(secret: &PrivateKeyBytes, prefixes: &Prefixes) -> Result<Zeroizing<String>> {
    encode_checked(prefixes.wif(), secret)
}

/// Parse a WIF string of the network described by `prefixes` into the raw scalar bytes.
///
/// The scalar must be a valid secret of the group `G`.
pub fn decode_wif<G: Group>(text: &str, prefixes: &Prefixes) -> Result<Zeroizing<PrivateKeyBytes>> {
    let body = decode_checked(text, prefixes.wif(), WIF_PAYLOAD_SIZE)?;
    let secret = Zeroizing::new(PrivateKeyBytes::try_from(&body[..])?);
    if G::scalar_from_bytes(&secret).is_none() {
        return Err(Error::InvalidKey);
    }
    Ok(secret)
}
