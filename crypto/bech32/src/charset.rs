use crate::{Error, Result};

pub(crate) const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const INVALID: u8 = 100;

/// Reverse lookup of [`CHARSET`], lowercase ASCII only.
const REV_CHARSET: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Map 5-bit groups to their alphabet symbols.
pub fn to_chars(groups: &[u8]) -> Result<String> {
    groups
        .iter()
        .enumerate()
        .map(|(index, &group)| match CHARSET.get(group as usize) {
            Some(c) => Ok(*c as char),
            None => Err(Error::InvalidInput { index, value: group, width: 5 }),
        })
        .collect()
}

/// Map lowercase alphabet symbols back to 5-bit groups.
pub fn from_chars(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| match REV_CHARSET.get(c as usize) {
            Some(&group) if group != INVALID => Ok(group),
            _ => Err(Error::InvalidCharacter(c)),
        })
        .collect()
}
