//! Error types for the Enigma machine library.

use thiserror::Error;

/// Errors produced while configuring an Enigma machine.
///
/// Every variant describes an invalid request from the caller. Encryption
/// itself never fails once a machine has been built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The rotor list did not contain exactly three names.
    #[error("exactly three rotors must be specified, got {0}")]
    WrongRotorCount(usize),

    /// A rotor name is not present in the catalog.
    #[error("invalid rotor type: {0}")]
    UnknownRotor(String),

    /// The reflector name is not present in the catalog.
    #[error("invalid reflector type: {0}")]
    UnknownReflector(String),

    /// A rotor position or ring setting fell outside [1, 26].
    #[error("{setting} must be between 1 and 26, got {value}")]
    OutOfRange { setting: &'static str, value: i32 },

    /// A plugboard character is not a Latin letter.
    #[error("plugboard connections must be between A and Z, got {0:?}")]
    InvalidLetter(char),

    /// A plugboard letter already has a partner.
    #[error("letter {0} is already connected")]
    AlreadyConnected(char),

    /// A wiring table offered to the catalog is malformed.
    #[error("invalid wiring for {name}: {reason}")]
    InvalidWiring { name: String, reason: String },

    /// A plugboard token was not exactly two characters.
    #[error("invalid plugboard pair: {0}")]
    InvalidPlugPair(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;
