//! Regrouping of bit strings between byte widths.

use crate::{Error, Result};

/// Repack `input`, read as consecutive groups of `from` bits, into groups of `to` bits.
///
/// Bits are consumed and produced MSB-first through an accumulator. Every input
/// value must fit in `from` bits.
///
/// The 8 -> 5 direction always succeeds and zero-pads a trailing partial group.
/// Any other direction is strict: the leftover bits must be shorter than one
/// input group and must all be zero, otherwise [`Error::InvalidPadding`] is
/// returned.
pub fn squash(input: &[u8], from: u32, to: u32) -> Result<Vec<u8>> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(Error::UnsupportedWidth { from, to });
    }

    let max_value = (1u32 << to) - 1;
    let mut accumulator = 0u32;
    let mut bits = 0u32;
    let mut output = Vec::with_capacity((input.len() * from as usize).div_ceil(to as usize));

    for (index, &value) in input.iter().enumerate() {
        if (value as u32) >> from != 0 {
            return Err(Error::InvalidInput { index, value, width: from });
        }
        // only the bits not yet emitted are kept, so the accumulator never exceeds 16 bits
        accumulator = ((accumulator << from) | value as u32) & 0xffff;
        bits += from;
        while bits >= to {
            bits -= to;
            output.push(((accumulator >> bits) & max_value) as u8);
        }
    }

    if from == 8 && to == 5 {
        if bits != 0 {
            output.push(((accumulator << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || ((accumulator << (to - bits)) & max_value) != 0 {
        return Err(Error::InvalidPadding { from, to });
    }

    Ok(output)
}

/// Split bytes into 5-bit groups, zero-padding the last group.
pub fn bytes_8_to_5(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity((input.len() * 8).div_ceil(5));
    let mut accumulator = 0u32;
    let mut bits = 0u32;
    for &byte in input {
        accumulator = ((accumulator << 8) | byte as u32) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            output.push(((accumulator >> bits) & 0x1f) as u8);
        }
    }
    if bits != 0 {
        output.push(((accumulator << (5 - bits)) & 0x1f) as u8);
    }
    output
}

/// Join 5-bit groups back into bytes, rejecting non-canonical padding.
pub fn bytes_5_to_8(input: &[u8]) -> Result<Vec<u8>> {
    squash(input, 5, 8)
}
