use crate::error::LutError;
use crate::lut::escape::{escape_bytes, REPLACEMENT};
use crate::types::{CharacterEntry, LookupTable, Token};

pub const TABLE_SIZE: usize = 256;

const DEL: u8 = 0x7F;

/// Assemble the full table: control bytes and DEL map to U+FFFD, printable
/// ASCII maps to itself, and token `i` fills slot `0x80 + i`.
pub fn build_table(tokens: &[Token]) -> Result<LookupTable, LutError> {
    let mut literals: Vec<String> = Vec::with_capacity(TABLE_SIZE);
    let mut lengths: Vec<usize> = Vec::with_capacity(TABLE_SIZE);

    let unrecognised = escape_bytes(REPLACEMENT);

    for _ in 0x00..0x20 {
        literals.push(unrecognised.clone());
        lengths.push(REPLACEMENT.len());
    }

    for b in 0x20..DEL {
        literals.push(escape_bytes(&[b]));
        lengths.push(1);
    }

    literals.push(unrecognised);
    lengths.push(REPLACEMENT.len());

    for token in tokens {
        literals.push(escape_bytes(token.as_bytes()));
        lengths.push(token.len());
    }

    check_size("literals", literals.len())?;
    check_size("lengths", lengths.len())?;

    let entries = literals
        .into_iter()
        .zip(lengths)
        .map(|(literal, byte_len)| CharacterEntry { literal, byte_len })
        .collect();

    Ok(LookupTable { entries })
}

fn check_size(array: &'static str, len: usize) -> Result<(), LutError> {
    if len != TABLE_SIZE {
        return Err(LutError::Invariant {
            array,
            len,
            expected: TABLE_SIZE,
        });
    }
    Ok(())
}
