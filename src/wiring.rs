//! Validated letter permutations.
//!
//! A [`Wiring`] stores both directions of a 26-letter bijection so the
//! return path through a rotor is a table lookup instead of a scan.

use crate::alphabet::{self, SIZE};
use crate::error::{EnigmaError, Result};

/// A bijection over the 26 alphabet indices with its precomputed inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; SIZE],
    inverse: [u8; SIZE],
}

impl Wiring {
    /// Parses and validates a wiring string such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// Position `i` of the string is the letter produced for input index `i`.
    ///
    /// # Parameters
    /// - `name`: Component name, used only in error messages.
    /// - `wiring`: Exactly 26 uppercase letters, each appearing once.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the string has the wrong
    /// length, contains a non-letter, or repeats a letter.
    pub fn parse(name: &str, wiring: &str) -> Result<Self> {
        let forward = alphabet::parse_table(wiring).ok_or_else(|| EnigmaError::InvalidWiring {
            name: name.to_string(),
            reason: "expected exactly 26 uppercase letters".to_string(),
        })?;

        let mut inverse = [u8::MAX; SIZE];
        for (input, &output) in forward.iter().enumerate() {
            let slot = &mut inverse[output as usize];
            if *slot != u8::MAX {
                return Err(EnigmaError::InvalidWiring {
                    name: name.to_string(),
                    reason: format!("letter {} appears more than once", alphabet::letter_at(output)),
                });
            }
            *slot = input as u8;
        }

        Ok(Wiring { forward, inverse })
    }

    /// Maps an input index to its output index.
    pub fn forward(&self, index: u8) -> u8 {
        self.forward[index as usize]
    }

    /// Finds the input index that produces `index`.
    pub fn inverse(&self, index: u8) -> u8 {
        self.inverse[index as usize]
    }

    /// Returns `true` if applying the wiring twice yields the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Returns `true` if some letter maps to itself.
    pub fn has_fixed_point(&self) -> bool {
        self.forward
            .iter()
            .enumerate()
            .any(|(i, &o)| i as u8 == o)
    }

    /// Renders the forward table back into its 26-letter string form.
    pub fn to_letters(&self) -> String {
        self.forward.iter().map(|&i| alphabet::letter_at(i)).collect()
    }
}
