//! Rotor: a rotating permutation stage.
//!
//! A rotor applies its wiring relative to its current rotational position
//! and ring setting. The signal enters from the right on the way to the
//! reflector ([`forward`](Rotor::forward)) and from the left on the way
//! back ([`backward`](Rotor::backward)); the two passes are exact inverses
//! for a fixed position.

use crate::alphabet::{self, SIZE};
use crate::catalog::RotorSpec;
use crate::wiring::Wiring;

/// One rotor slot of the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Wiring,
    notch: u8,
    position: u8,
    ring_setting: u8,
}

impl Rotor {
    /// Creates a rotor from a catalog entry at position 0, ring setting 0.
    pub(crate) fn from_spec(name: &str, spec: &RotorSpec) -> Self {
        Rotor {
            name: name.to_string(),
            wiring: spec.wiring.clone(),
            notch: spec.notch,
            position: 0,
            ring_setting: 0,
        }
    }

    /// Catalog name of this rotor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current rotational position, 0-indexed.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Current ring setting, 0-indexed.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Notch position, 1-indexed.
    pub fn notch(&self) -> u8 {
        self.notch
    }

    pub(crate) fn set_position(&mut self, position: u8) {
        self.position = position % SIZE as u8;
    }

    pub(crate) fn set_ring_setting(&mut self, ring_setting: u8) {
        self.ring_setting = ring_setting % SIZE as u8;
    }

    /// Rotates by one step, wrapping Z back to A.
    pub(crate) fn advance(&mut self) {
        self.position = alphabet::shift(self.position, 1);
    }

    /// Returns `true` when the rotor sits on its notch.
    ///
    /// The notch is stored 1-indexed while the position is 0-indexed, so the
    /// comparison is against `notch - 1`.
    pub(crate) fn at_notch(&self) -> bool {
        self.position + 1 == self.notch
    }

    /// Combined rotation and ring offset applied around the wiring lookup.
    fn offset(&self) -> i32 {
        self.position as i32 - self.ring_setting as i32
    }

    /// Passes a signal right-to-left through the rotor.
    pub(crate) fn forward(&self, index: u8) -> u8 {
        let offset = self.offset();
        let contact = alphabet::shift(index, offset);
        alphabet::shift(self.wiring.forward(contact), -offset)
    }

    /// Passes a signal left-to-right through the rotor.
    pub(crate) fn backward(&self, index: u8) -> u8 {
        let offset = self.offset();
        let contact = alphabet::shift(index, offset);
        alphabet::shift(self.wiring.inverse(contact), -offset)
    }
}
