//! BCH checksum over the human-readable prefix and the 5-bit payload.

/// Number of 5-bit groups appended as checksum.
pub const CHECKSUM_LENGTH: usize = 6;

// Checksum for bech32
// https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki#checksum
fn polymod<'data, I>(values: I) -> u32
where
    I: Iterator<Item = &'data u8>,
{
    let mut c = 1u32;
    for d in values {
        let c0 = c >> 25;
        c = ((c & 0x01ffffff) << 5) ^ (*d as u32);

        if c0 & 0x01 != 0 {
            c ^= 0x3b6a57b2;
        }
        if c0 & 0x02 != 0 {
            c ^= 0x26508e6d;
        }
        if c0 & 0x04 != 0 {
            c ^= 0x1ea119fa;
        }
        if c0 & 0x08 != 0 {
            c ^= 0x3d4233dd;
        }
        if c0 & 0x10 != 0 {
            c ^= 0x2a1462b3;
        }
    }
    c
}

/// High 3 bits of every prefix char, a zero separator, then the low 5 bits of every char.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let bytes = prefix.as_bytes();
    let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
    expanded.extend(bytes.iter().map(|c| c >> 5));
    expanded.push(0);
    expanded.extend(bytes.iter().map(|c| c & 0x1f));
    expanded
}

/// Compute the six checksum groups for `payload` (5-bit groups) under `prefix`.
pub fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let expanded = expand_prefix(prefix);
    let value = polymod(expanded.iter().chain(payload).chain(&[0u8; CHECKSUM_LENGTH])) ^ 1;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, group) in checksum.iter_mut().enumerate() {
        *group = ((value >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Check `data` (payload groups followed by the checksum groups) against `prefix`.
pub fn verify_checksum(prefix: &str, data: &[u8]) -> bool {
    let expanded = expand_prefix(prefix);
    polymod(expanded.iter().chain(data)) == 1
}
