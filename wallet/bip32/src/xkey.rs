//! Wire layout of serialized extended keys (e.g. `xprv` and `xpub`)

use crate::{
    ChildNumber, Error, ExtendedKeyAttrs, KEY_SIZE, KeyFingerprint, PrivateKeyBytes, PublicKeyBytes, Result, network::Prefixes,
};
use zeroize::Zeroizing;

/// depth(1) | parent fingerprint(4) | child number(4) | chain code(32)
const HEADER_SIZE: usize = 1 + 4 + 4 + KEY_SIZE;

/// Header, a zero byte and the scalar.
pub const PRIVATE_PAYLOAD_SIZE: usize = HEADER_SIZE + 1 + KEY_SIZE;

/// Header and the compressed element.
pub const PUBLIC_PAYLOAD_SIZE: usize = HEADER_SIZE + crate::PUBLIC_KEY_SIZE;

/// Key material of a serialized extended key, not yet validated against a group.
pub(crate) enum KeyBytes {
    Private(Zeroizing<PrivateKeyBytes>),
    Public(PublicKeyBytes),
}

/// Serialized extended key before group validation.
pub(crate) struct SerializedKey {
    pub attrs: ExtendedKeyAttrs,
    pub key_bytes: KeyBytes,
}

impl SerializedKey {
    /// Bech32-encode under the extended private or public tag of `prefixes`.
    pub fn encode(&self, prefixes: &Prefixes) -> Result<Zeroizing<String>> {
        let mut payload = Zeroizing::new(Vec::with_capacity(PUBLIC_PAYLOAD_SIZE));
        payload.push(self.attrs.depth);
        payload.extend_from_slice(&self.attrs.parent_fingerprint);
        payload.extend_from_slice(&self.attrs.child_number.to_bytes());
        payload.extend_from_slice(&self.attrs.chain_code);

        let prefix = match &self.key_bytes {
            KeyBytes::Private(secret) => {
                payload.push(0);
                payload.extend_from_slice(&secret[..]);
                prefixes.extended_private()
            }
            KeyBytes::Public(public) => {
                payload.extend_from_slice(public);
                prefixes.extended_public()
            }
        };

        Ok(Zeroizing::new(olympus_bech32::encode(prefix, &payload)?))
    }

    /// Decode a key that must belong to the network described by `prefixes`.
    pub fn decode(text: &str, prefixes: &Prefixes) -> Result<Self> {
        let (prefix, payload) = olympus_bech32::decode(text)?;
        let payload = Zeroizing::new(payload);
        Self::from_payload(&prefix, &payload, prefixes)
    }

    /// Decode a key of any registered network.
    pub fn decode_registered(text: &str) -> Result<(Self, &'static Prefixes)> {
        let (prefix, payload) = olympus_bech32::decode(text)?;
        let payload = Zeroizing::new(payload);
        let prefixes = Prefixes::registered()
            .find(|prefixes| prefixes.extended_private() == prefix || prefixes.extended_public() == prefix)
            .ok_or_else(|| Error::NetworkMismatch(prefix.clone()))?;
        Ok((Self::from_payload(&prefix, &payload, prefixes)?, prefixes))
    }

    fn from_payload(prefix: &str, payload: &[u8], prefixes: &Prefixes) -> Result<Self> {
        let is_private = if prefix == prefixes.extended_private() {
            true
        } else if prefix == prefixes.extended_public() {
            false
        } else {
            return Err(Error::NetworkMismatch(prefix.to_string()));
        };

        let expected_len = if is_private { PRIVATE_PAYLOAD_SIZE } else { PUBLIC_PAYLOAD_SIZE };
        if payload.len() != expected_len {
            return Err(Error::DecodeLength(payload.len(), expected_len));
        }

        let attrs = ExtendedKeyAttrs {
            depth: payload[0],
            parent_fingerprint: payload[1..5].try_into()?,
            child_number: ChildNumber::from_bytes(payload[5..9].try_into()?),
            chain_code: payload[9..HEADER_SIZE].try_into()?,
        };
        // a master key has neither parent nor index
        if attrs.is_root() && (attrs.parent_fingerprint != KeyFingerprint::default() || attrs.child_number != ChildNumber::default()) {
            return Err(Error::InvalidKey);
        }

        let key_bytes = if is_private {
            if payload[HEADER_SIZE] != 0 {
                return Err(Error::InvalidKey);
            }
            KeyBytes::Private(Zeroizing::new(payload[HEADER_SIZE + 1..].try_into()?))
        } else {
            KeyBytes::Public(payload[HEADER_SIZE..].try_into()?)
        };

        Ok(SerializedKey { attrs, key_bytes })
    }
}
