//! Named rotor and reflector wirings.
//!
//! The built-in catalog holds the historical Enigma I rotors I–V and the
//! reflectors A, B and C. Additional wirings can be registered on an owned
//! [`Catalog`] and handed to [`Machine::with_catalog`](crate::Machine::with_catalog).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{EnigmaError, Result};
use crate::wiring::Wiring;

/// Historical rotor wirings with their 1-indexed notch letters.
const ROTOR_TABLE: [(&str, &str, u8); 5] = [
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 17),   // Q
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", 5),   // E
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", 22), // V
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", 10),  // J
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", 26),   // Z
];

/// Historical reflector wirings.
const REFLECTOR_TABLE: [(&str, &str); 3] = [
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

/// Catalog entry describing one rotor type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    pub(crate) wiring: Wiring,
    /// 1-indexed notch position (`A = 1`).
    pub(crate) notch: u8,
}

impl RotorSpec {
    /// Returns the rotor wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Returns the 1-indexed notch position.
    pub fn notch(&self) -> u8 {
        self.notch
    }
}

/// A registry of named rotor and reflector wirings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rotors: BTreeMap<String, RotorSpec>,
    reflectors: BTreeMap<String, Wiring>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared built-in catalog, built on first use.
    ///
    /// # Panics
    /// Only if the compiled-in tables are malformed, which the unit tests
    /// rule out.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::load_builtin().expect("built-in wiring tables are valid"))
    }

    /// Creates an owned copy of the built-in catalog that can be extended.
    pub fn with_builtin() -> Self {
        Self::builtin().clone()
    }

    fn load_builtin() -> Result<Self> {
        let mut catalog = Catalog::new();
        for (name, wiring, notch) in ROTOR_TABLE {
            catalog.register_rotor(name, wiring, notch)?;
        }
        for (name, wiring) in REFLECTOR_TABLE {
            catalog.register_reflector(name, wiring)?;
        }
        Ok(catalog)
    }

    /// Registers (or replaces) a named rotor.
    ///
    /// # Parameters
    /// - `name`: Rotor name used by [`Machine::new`](crate::Machine::new).
    /// - `wiring`: 26-letter permutation.
    /// - `notch`: 1-indexed notch position in `[1, 26]`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not a
    /// permutation or the notch is out of range.
    pub fn register_rotor(&mut self, name: &str, wiring: &str, notch: u8) -> Result<()> {
        if !(1..=26).contains(&notch) {
            return Err(EnigmaError::InvalidWiring {
                name: name.to_string(),
                reason: format!("notch must be between 1 and 26, got {}", notch),
            });
        }
        let wiring = Wiring::parse(name, wiring)?;
        self.rotors
            .insert(name.to_string(), RotorSpec { wiring, notch });
        Ok(())
    }

    /// Registers (or replaces) a named reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not a
    /// self-inverse permutation.
    pub fn register_reflector(&mut self, name: &str, wiring: &str) -> Result<()> {
        let wiring = Wiring::parse(name, wiring)?;
        if !wiring.is_involution() {
            return Err(EnigmaError::InvalidWiring {
                name: name.to_string(),
                reason: "reflector wiring must be self-inverse".to_string(),
            });
        }
        self.reflectors.insert(name.to_string(), wiring);
        Ok(())
    }

    /// Looks up a rotor by name.
    pub fn rotor(&self, name: &str) -> Option<&RotorSpec> {
        self.rotors.get(name)
    }

    /// Looks up a reflector by name.
    pub fn reflector(&self, name: &str) -> Option<&Wiring> {
        self.reflectors.get(name)
    }

    /// Registered rotor names in sorted order.
    pub fn rotor_names(&self) -> impl Iterator<Item = &str> {
        self.rotors.keys().map(String::as_str)
    }

    /// Registered reflector names in sorted order.
    pub fn reflector_names(&self) -> impl Iterator<Item = &str> {
        self.reflectors.keys().map(String::as_str)
    }
}
