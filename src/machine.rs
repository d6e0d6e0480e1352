//! Machine: the three-rotor Enigma.
//!
//! Orchestrates plugboard, rotor stack and reflector for each letter:
//!
//! ```text
//! plugboard → step → rotors 2,1,0 → reflector → rotors 0,1,2 → plugboard
//! ```
//!
//! Rotor index 0 is the leftmost (slowest) rotor, index 2 the rightmost
//! (fastest). All public settings are 1-indexed like the letter rings on
//! the physical rotors; internal state is 0-indexed.

use tracing::{debug, trace};

use crate::alphabet;
use crate::catalog::Catalog;
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Number of rotor slots.
pub const NUM_ROTORS: usize = 3;

/// Slot indices for readability in the stepping logic.
const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// A configured three-rotor Enigma machine.
///
/// # Lifecycle
///
/// Build with [`new`](Self::new) or [`with_catalog`](Self::with_catalog),
/// adjust positions, ring settings and plugboard, then feed characters to
/// [`encrypt_char`](Self::encrypt_char). Each letter advances the rotors;
/// anything else passes through untouched.
///
/// Because the machine is reciprocal, decryption is encryption from the
/// same starting positions.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; NUM_ROTORS],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    // ──────── Construction ────────

    /// Creates a machine from the built-in catalog.
    ///
    /// All positions and ring settings start at 1 (`A`) and the plugboard
    /// starts empty.
    ///
    /// # Parameters
    /// - `rotor_names`: Exactly three rotor names, leftmost first.
    /// - `reflector_name`: Reflector name.
    ///
    /// # Errors
    /// - [`EnigmaError::WrongRotorCount`] if `rotor_names.len() != 3`.
    /// - [`EnigmaError::UnknownReflector`] if the reflector is not in the catalog.
    /// - [`EnigmaError::UnknownRotor`] for the first rotor not in the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// let mut m = Machine::new(&["I", "II", "III"], "B").unwrap();
    /// assert_eq!(m.encrypt_char('A'), 'B');
    /// ```
    ///
    /// ```
    /// use enigma::{EnigmaError, Machine};
    ///
    /// let err = Machine::new(&["I", "II"], "B").unwrap_err();
    /// assert_eq!(err, EnigmaError::WrongRotorCount(2));
    /// ```
    pub fn new<S: AsRef<str>>(rotor_names: &[S], reflector_name: &str) -> Result<Self> {
        Self::with_catalog(Catalog::builtin(), rotor_names, reflector_name)
    }

    /// Creates a machine whose rotors and reflector come from `catalog`.
    ///
    /// Same contract as [`new`](Self::new).
    pub fn with_catalog<S: AsRef<str>>(
        catalog: &Catalog,
        rotor_names: &[S],
        reflector_name: &str,
    ) -> Result<Self> {
        let names: &[S; NUM_ROTORS] = rotor_names
            .try_into()
            .map_err(|_| EnigmaError::WrongRotorCount(rotor_names.len()))?;

        let reflector_wiring = catalog
            .reflector(reflector_name)
            .ok_or_else(|| EnigmaError::UnknownReflector(reflector_name.to_string()))?;

        let lookup = |name: &S| -> Result<Rotor> {
            let name = name.as_ref();
            catalog
                .rotor(name)
                .map(|spec| Rotor::from_spec(name, spec))
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))
        };
        let rotors = [
            lookup(&names[LEFT])?,
            lookup(&names[MIDDLE])?,
            lookup(&names[RIGHT])?,
        ];

        debug!(
            rotors = ?[rotors[LEFT].name(), rotors[MIDDLE].name(), rotors[RIGHT].name()],
            reflector = reflector_name,
            "machine constructed"
        );

        Ok(Machine {
            rotors,
            reflector: Reflector::new(reflector_name, reflector_wiring),
            plugboard: Plugboard::new(),
        })
    }

    // ──────── Configuration ────────

    /// Returns every rotor to position 1 (`A`).
    ///
    /// Ring settings and plugboard are left as they are.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.set_position(0);
        }
        debug!("rotor positions reset");
    }

    /// Sets the three rotor positions, leftmost first.
    ///
    /// # Parameters
    /// - `p0`, `p1`, `p2`: Positions in `[1, 26]` (`A = 1`).
    ///
    /// # Errors
    /// Returns [`EnigmaError::OutOfRange`] for the first value outside
    /// `[1, 26]`; no position is changed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// let mut m = Machine::new(&["I", "II", "III"], "B").unwrap();
    /// m.set_positions(1, 4, 21).unwrap();
    /// assert_eq!(m.window(), "ADU");
    /// assert!(m.set_positions(0, 1, 1).is_err());
    /// assert_eq!(m.window(), "ADU");
    /// ```
    pub fn set_positions(&mut self, p0: i32, p1: i32, p2: i32) -> Result<()> {
        let values = Self::validate_settings("rotor positions", [p0, p1, p2])?;
        for (rotor, value) in self.rotors.iter_mut().zip(values) {
            rotor.set_position(value);
        }
        debug!(window = %self.window(), "rotor positions set");
        Ok(())
    }

    /// Sets the three ring settings, leftmost first.
    ///
    /// Same `[1, 26]` contract and all-or-nothing behaviour as
    /// [`set_positions`](Self::set_positions).
    pub fn set_ring_settings(&mut self, r0: i32, r1: i32, r2: i32) -> Result<()> {
        let values = Self::validate_settings("ring settings", [r0, r1, r2])?;
        for (rotor, value) in self.rotors.iter_mut().zip(values) {
            rotor.set_ring_setting(value);
        }
        debug!(rings = ?self.ring_settings(), "ring settings set");
        Ok(())
    }

    /// Connects two letters on the plugboard.
    ///
    /// # Errors
    /// See [`Plugboard::connect`].
    pub fn add_plug_connection(&mut self, a: char, b: char) -> Result<()> {
        self.plugboard.connect(a, b)?;
        debug!(a = %a, b = %b, "plugboard connection added");
        Ok(())
    }

    // ──────── Encryption ────────

    /// Encrypts a single character.
    ///
    /// Uppercase letters step the rotors and are substituted. Any other
    /// character, including lowercase letters, is returned unchanged and
    /// leaves the machine state untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// let mut m = Machine::new(&["I", "II", "III"], "B").unwrap();
    /// assert_eq!(m.encrypt_char('7'), '7');
    /// assert_eq!(m.window(), "AAA");
    /// ```
    pub fn encrypt_char(&mut self, c: char) -> char {
        let Some(index) = alphabet::index_of(c) else {
            return c;
        };

        self.step();

        let mut signal = self.plugboard.swap(index);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in &self.rotors {
            signal = rotor.backward(signal);
        }
        signal = self.plugboard.swap(signal);

        alphabet::letter_at(signal)
    }

    /// Uppercases `text` and encrypts it character by character.
    ///
    /// Every input character yields exactly one output character. A
    /// character whose uppercase form is more than one character, such as
    /// `'ß'`, is kept as is and passes through as a non-letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// let mut m = Machine::new(&["I", "II", "III"], "B").unwrap();
    /// assert_eq!(m.encrypt_str("hello world"), "ILBDA AMTAZ");
    /// ```
    pub fn encrypt_str(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt_char(Self::uppercase(c)))
            .collect()
    }

    /// Uppercases a single character, keeping it unchanged when its
    /// uppercase form is not a single character.
    fn uppercase(c: char) -> char {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    }

    // ──────── Accessors ────────

    /// Current rotor positions, 0-indexed, leftmost first.
    pub fn positions(&self) -> [u8; NUM_ROTORS] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Current ring settings, 0-indexed, leftmost first.
    pub fn ring_settings(&self) -> [u8; NUM_ROTORS] {
        [
            self.rotors[LEFT].ring_setting(),
            self.rotors[MIDDLE].ring_setting(),
            self.rotors[RIGHT].ring_setting(),
        ]
    }

    /// The letters visible in the rotor windows, e.g. `"AAA"`.
    pub fn window(&self) -> String {
        self.rotors
            .iter()
            .map(|r| alphabet::letter_at(r.position()))
            .collect()
    }

    /// The installed rotors, leftmost first.
    pub fn rotors(&self) -> &[Rotor; NUM_ROTORS] {
        &self.rotors
    }

    /// The installed reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    // ──────── Stepping ────────

    /// Advances the rotor stack by one key press.
    ///
    /// The middle rotor on its notch steps itself and the left rotor
    /// (double step). Otherwise the right rotor on its notch carries the
    /// middle rotor. The right rotor always steps.
    fn step(&mut self) {
        if self.rotors[MIDDLE].at_notch() {
            self.rotors[MIDDLE].advance();
            self.rotors[LEFT].advance();
        } else if self.rotors[RIGHT].at_notch() {
            self.rotors[MIDDLE].advance();
        }
        self.rotors[RIGHT].advance();

        trace!(window = %self.window(), "rotors stepped");
    }

    /// Checks three 1-indexed settings and converts them to 0-indexed.
    fn validate_settings(
        setting: &'static str,
        values: [i32; NUM_ROTORS],
    ) -> Result<[u8; NUM_ROTORS]> {
        let mut out = [0u8; NUM_ROTORS];
        for (slot, value) in out.iter_mut().zip(values) {
            if !(1..=26).contains(&value) {
                return Err(EnigmaError::OutOfRange { setting, value });
            }
            *slot = (value - 1) as u8;
        }
        Ok(out)
    }
}
