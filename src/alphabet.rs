//! Letter/index conversion over the 26-letter Latin alphabet.
//!
//! All internal arithmetic works on indices `0..26` where `A = 0`.

/// Number of letters handled by the machine.
pub const SIZE: usize = 26;

/// Converts an uppercase letter to its alphabet index.
///
/// # Returns
/// `Some(index)` for `'A'..='Z'`, `None` for anything else (including
/// lowercase letters, which callers normalise first).
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Converts an alphabet index back to its uppercase letter.
///
/// `index` is reduced modulo 26 first.
pub fn letter_at(index: u8) -> char {
    (b'A' + index % SIZE as u8) as char
}

/// Adds a signed offset to an index, wrapping into `0..26`.
pub fn shift(index: u8, offset: i32) -> u8 {
    (index as i32 + offset).rem_euclid(SIZE as i32) as u8
}

/// Parses a 26-letter wiring string into an index table.
///
/// # Returns
/// The table, or `None` if the string is not exactly 26 uppercase letters.
/// Permutation checks are left to the caller.
pub(crate) fn parse_table(wiring: &str) -> Option<[u8; SIZE]> {
    let mut table = [0u8; SIZE];
    let mut chars = wiring.chars();
    for slot in table.iter_mut() {
        *slot = index_of(chars.next()?)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(table)
}
