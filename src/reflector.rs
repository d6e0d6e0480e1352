//! Reflector: the fixed self-inverse stage between the two rotor passes.

use crate::wiring::Wiring;

/// A fixed involutive permutation. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: Wiring,
}

impl Reflector {
    /// Wraps a catalog wiring that has already been checked to be an involution.
    pub(crate) fn new(name: &str, wiring: &Wiring) -> Self {
        Reflector {
            name: name.to_string(),
            wiring: wiring.clone(),
        }
    }

    /// Catalog name of this reflector.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sends a signal back towards the rotors.
    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring.forward(index)
    }
}
