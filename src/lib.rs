//! Enigma rotor cipher machine.
//!
//! Simulates the three-rotor Enigma I: plugboard, three rotors with ring
//! settings and the double-stepping anomaly, and a reflector. The machine
//! is reciprocal, so the same settings both encrypt and decrypt.
//!
//! # Architecture
//!
//! ```text
//! Wiring     (validated 26-letter permutation + inverse)
//!     ↓ named in
//! Catalog    (rotors I–V, reflectors A–C, plus registered wirings)
//!     ↓ instantiated as
//! Rotor ×3, Reflector, Plugboard
//!     ↓ owned by
//! Machine    (stepping + substitution pass)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::Machine;
//!
//! let mut sender = Machine::new(&["I", "II", "III"], "B").unwrap();
//! sender.set_positions(1, 1, 1).unwrap();
//! sender.add_plug_connection('A', 'Q').unwrap();
//! let ciphertext = sender.encrypt_str("ATTACK AT DAWN");
//!
//! let mut receiver = Machine::new(&["I", "II", "III"], "B").unwrap();
//! receiver.add_plug_connection('A', 'Q').unwrap();
//! assert_eq!(receiver.encrypt_str(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Register a custom rotor:
//!
//! ```
//! use enigma::{Catalog, Machine};
//!
//! let mut catalog = Catalog::with_builtin();
//! catalog.register_rotor("Shift", "BCDEFGHIJKLMNOPQRSTUVWXYZA", 26).unwrap();
//! let m = Machine::with_catalog(&catalog, &["I", "II", "Shift"], "B").unwrap();
//! assert_eq!(m.rotors()[2].name(), "Shift");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod settings;
pub mod stream;
pub mod wiring;

mod machine;

pub use catalog::Catalog;
pub use error::{EnigmaError, Result};
pub use machine::{Machine, NUM_ROTORS};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::Settings;
pub use wiring::Wiring;
