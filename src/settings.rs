//! Machine settings as supplied by a key sheet or the command line.
//!
//! [`Settings`] collects everything needed to build a [`Machine`] and applies
//! it in a fixed order: construct, reset, positions, ring settings, plugs.

use tracing::debug;

use crate::error::{EnigmaError, Result};
use crate::machine::{Machine, NUM_ROTORS};

/// A complete machine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Rotor names, leftmost first.
    pub rotors: Vec<String>,
    /// Reflector name.
    pub reflector: String,
    /// Starting positions, 1-indexed.
    pub positions: [i32; NUM_ROTORS],
    /// Ring settings, 1-indexed.
    pub rings: [i32; NUM_ROTORS],
    /// Plugboard cables.
    pub plugs: Vec<(char, char)>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rotors: vec!["I".into(), "II".into(), "III".into()],
            reflector: "B".into(),
            positions: [1, 1, 1],
            rings: [1, 1, 1],
            plugs: Vec::new(),
        }
    }
}

impl Settings {
    /// Builds a machine from these settings.
    ///
    /// # Errors
    /// The first error raised by construction or by any setter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Settings;
    ///
    /// let mut m = Settings::default().build().unwrap();
    /// assert_eq!(m.encrypt_str("AAAAA"), "BDZGO");
    /// ```
    pub fn build(&self) -> Result<Machine> {
        let mut machine = Machine::new(self.rotors.as_slice(), &self.reflector)?;
        machine.reset();

        let [p0, p1, p2] = self.positions;
        machine.set_positions(p0, p1, p2)?;

        let [r0, r1, r2] = self.rings;
        machine.set_ring_settings(r0, r1, r2)?;

        for &(a, b) in &self.plugs {
            machine.add_plug_connection(a, b)?;
        }

        debug!(window = %machine.window(), plugs = self.plugs.len(), "machine configured");
        Ok(machine)
    }
}

/// Splits a comma-separated rotor list such as `"I,II,III"`.
///
/// Surrounding whitespace is trimmed from each name. Validation of the
/// count and names happens when the machine is built.
pub fn parse_rotor_list(list: &str) -> Vec<String> {
    list.split(',').map(|name| name.trim().to_string()).collect()
}

/// Parses whitespace-separated plugboard pairs such as `"AB CD EF"`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidPlugPair`] for any token that is not
/// exactly two characters. Letter validity and reuse are checked when the
/// pairs are applied to a machine.
///
/// # Examples
///
/// ```
/// use enigma::settings::parse_plug_pairs;
///
/// assert_eq!(parse_plug_pairs("AB cd").unwrap(), vec![('A', 'B'), ('c', 'd')]);
/// assert!(parse_plug_pairs("ABC").is_err());
/// ```
pub fn parse_plug_pairs(pairs: &str) -> Result<Vec<(char, char)>> {
    pairs.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => Ok((a, b)),
                _ => Err(EnigmaError::InvalidPlugPair(token.to_string())),
            }
        })
        .collect()
}
