//! Plugboard: symmetric letter swaps applied before and after the rotors.

use crate::alphabet::{self, SIZE};
use crate::error::{EnigmaError, Result};

/// A symmetric partial mapping over `A..=Z`.
///
/// Each letter has at most one partner, and partnership is always mutual.
/// Unconnected letters pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    partners: [Option<u8>; SIZE],
}

impl Plugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects two letters with a cable.
    ///
    /// Input is case-insensitive. The pair is installed in both directions or
    /// not at all.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] if either character is not a Latin letter.
    /// - [`EnigmaError::AlreadyConnected`] if either letter already has a partner.
    pub fn connect(&mut self, a: char, b: char) -> Result<()> {
        let a = a.to_ascii_uppercase();
        let b = b.to_ascii_uppercase();
        let ia = alphabet::index_of(a).ok_or(EnigmaError::InvalidLetter(a))?;
        let ib = alphabet::index_of(b).ok_or(EnigmaError::InvalidLetter(b))?;

        if self.partners[ia as usize].is_some() {
            return Err(EnigmaError::AlreadyConnected(a));
        }
        if self.partners[ib as usize].is_some() {
            return Err(EnigmaError::AlreadyConnected(b));
        }

        self.partners[ia as usize] = Some(ib);
        self.partners[ib as usize] = Some(ia);
        Ok(())
    }

    /// Applies the plugboard to an alphabet index.
    pub(crate) fn swap(&self, index: u8) -> u8 {
        self.partners[index as usize].unwrap_or(index)
    }

    /// Returns the partner of a letter, if it is connected.
    pub fn partner(&self, letter: char) -> Option<char> {
        let index = alphabet::index_of(letter.to_ascii_uppercase())?;
        self.partners[index as usize].map(alphabet::letter_at)
    }

    /// Number of cables installed.
    pub fn len(&self) -> usize {
        self.partners
            .iter()
            .enumerate()
            .filter(|(i, p)| matches!(p, Some(j) if *j as usize >= *i))
            .count()
    }

    /// Returns `true` if no cables are installed.
    pub fn is_empty(&self) -> bool {
        self.partners.iter().all(Option::is_none)
    }

    /// Installed pairs in alphabetical order of their first letter, e.g. `["AB", "CD"]`.
    pub fn pairs(&self) -> Vec<String> {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match *p {
                Some(j) if (i as u8) <= j => {
                    Some([alphabet::letter_at(i as u8), alphabet::letter_at(j)].iter().collect())
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_is_symmetric() {
        let mut pb = Plugboard::new();
        pb.connect('A', 'B').unwrap();
        assert_eq!(pb.partner('A'), Some('B'));
        assert_eq!(pb.partner('B'), Some('A'));
        assert_eq!(pb.swap(0), 1);
        assert_eq!(pb.swap(1), 0);
        assert_eq!(pb.swap(2), 2);
        assert_eq!(pb.len(), 1);
    }

    #[test]
    fn test_connect_lowercase() {
        let mut pb = Plugboard::new();
        pb.connect('q', 'z').unwrap();
        assert_eq!(pb.partner('Q'), Some('Z'));
        assert_eq!(pb.partner('z'), Some('Q'));
    }

    #[test]
    fn test_reuse_rejected_without_mutation() {
        let mut pb = Plugboard::new();
        pb.connect('A', 'B').unwrap();
        assert_eq!(pb.connect('A', 'C'), Err(EnigmaError::AlreadyConnected('A')));
        assert_eq!(pb.connect('C', 'B'), Err(EnigmaError::AlreadyConnected('B')));
        assert_eq!(pb.partner('C'), None);
        assert_eq!(pb.len(), 1);
    }

    #[test]
    fn test_self_pair_after_connection_rejected() {
        let mut pb = Plugboard::new();
        pb.connect('A', 'B').unwrap();
        assert_eq!(pb.connect('A', 'A'), Err(EnigmaError::AlreadyConnected('A')));
    }

    #[test]
    fn test_fresh_self_pair_is_identity() {
        let mut pb = Plugboard::new();
        pb.connect('K', 'K').unwrap();
        assert_eq!(pb.swap(10), 10);
        assert_eq!(pb.len(), 1);
        assert_eq!(pb.connect('K', 'L'), Err(EnigmaError::AlreadyConnected('K')));
    }

    #[test]
    fn test_invalid_letters() {
        let mut pb = Plugboard::new();
        assert_eq!(pb.connect('1', 'B'), Err(EnigmaError::InvalidLetter('1')));
        assert_eq!(pb.connect('A', '-'), Err(EnigmaError::InvalidLetter('-')));
        assert!(pb.is_empty());
    }

    #[test]
    fn test_pairs_listing() {
        let mut pb = Plugboard::new();
        pb.connect('X', 'C').unwrap();
        pb.connect('A', 'M').unwrap();
        assert_eq!(pb.pairs(), vec!["AM".to_string(), "CX".to_string()]);
    }
}
