//! Regression tests for the public machine API.
//!
//! All expected ciphertexts and rotor windows are frozen snapshots of the
//! Enigma I with the historical wirings: any change in output indicates a
//! regression in the wiring tables, the stepping logic or the substitution
//! pass.

use enigma::{Catalog, EnigmaError, Machine, Settings};

fn standard() -> Machine {
    Machine::new(&["I", "II", "III"], "B").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Golden ciphertexts
// ═══════════════════════════════════════════════════════════════════════

/// I-II-III, reflector B, positions AAA, rings AAA, empty plugboard.
#[test]
fn golden_single_letter() {
    let mut m = standard();
    assert_eq!(m.encrypt_char('A'), 'B');
}

#[test]
fn golden_repeated_a() {
    let mut m = standard();
    assert_eq!(m.encrypt_str("AAAAA"), "BDZGO");
}

#[test]
fn golden_hello_world() {
    let mut m = standard();
    assert_eq!(m.encrypt_str("HELLOWORLD"), "ILBDAAMTAZ");
    assert_eq!(m.window(), "AAK");
}

#[test]
fn golden_ring_settings_bbb() {
    let mut m = standard();
    m.set_ring_settings(2, 2, 2).unwrap();
    assert_eq!(m.encrypt_str("AAAAA"), "EWTYX");
}

#[test]
fn golden_full_key_sheet() {
    let mut m = Machine::new(&["III", "II", "I"], "C").unwrap();
    m.set_positions(5, 10, 15).unwrap();
    m.set_ring_settings(3, 7, 11).unwrap();
    for pair in ["PO", "ML", "IU", "KJ", "NH", "YT"] {
        let mut chars = pair.chars();
        m.add_plug_connection(chars.next().unwrap(), chars.next().unwrap())
            .unwrap();
    }
    assert_eq!(
        m.encrypt_str("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"),
        "NZYCAPMQYFEETZZHKFSBGUOOQMKQXYIWZTN"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping
// ═══════════════════════════════════════════════════════════════════════

/// Rotor windows after each of 56 key presses starting from ADU.
///
/// Covers the double step (ADV → AEW → BFX), two full revolutions of the
/// right rotor and two ordinary carries into the middle rotor.
const DOUBLE_STEP_WINDOWS: [&str; 56] = [
    "ADV", "AEW", "BFX", "BFY", "BFZ", "BFA", "BFB", "BFC", "BFD", "BFE", "BFF", "BFG", "BFH",
    "BFI", "BFJ", "BFK", "BFL", "BFM", "BFN", "BFO", "BFP", "BFQ", "BFR", "BFS", "BFT", "BFU",
    "BFV", "BGW", "BGX", "BGY", "BGZ", "BGA", "BGB", "BGC", "BGD", "BGE", "BGF", "BGG", "BGH",
    "BGI", "BGJ", "BGK", "BGL", "BGM", "BGN", "BGO", "BGP", "BGQ", "BGR", "BGS", "BGT", "BGU",
    "BGV", "BHW", "BHX", "BHY",
];

#[test]
fn double_step_sequence() {
    let mut m = standard();
    m.set_positions(1, 4, 21).unwrap();
    for (i, &expected) in DOUBLE_STEP_WINDOWS.iter().enumerate() {
        m.encrypt_char('X');
        assert_eq!(m.window(), expected, "window mismatch after press {}", i + 1);
    }
}

#[test]
fn ordinary_carry_from_aaa() {
    let mut m = standard();
    for _ in 0..21 {
        m.encrypt_char('A');
    }
    assert_eq!(m.positions(), [0, 0, 21]);
    m.encrypt_char('A');
    assert_eq!(m.positions(), [0, 1, 22]);
    for _ in 0..8 {
        m.encrypt_char('A');
    }
    assert_eq!(m.positions(), [0, 1, 4]);
}

#[test]
fn non_letters_do_not_step() {
    let mut m = standard();
    m.set_positions(3, 4, 5).unwrap();
    let before = m.positions();
    assert_eq!(m.encrypt_str("123 ,.;!?-"), "123 ,.;!?-");
    assert_eq!(m.positions(), before);
}

// ═══════════════════════════════════════════════════════════════════════
// Reciprocity
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn decrypts_with_identical_settings() {
    let settings = Settings {
        rotors: vec!["IV".into(), "V".into(), "I".into()],
        reflector: "A".into(),
        positions: [17, 5, 22],
        rings: [9, 1, 26],
        plugs: vec![('E', 'N'), ('I', 'G'), ('M', 'A')],
    };
    let plaintext = "WETTERVORHERSAGE BISKAYA";
    let ciphertext = settings.build().unwrap().encrypt_str(plaintext);
    assert_ne!(ciphertext, plaintext);
    assert_eq!(settings.build().unwrap().encrypt_str(&ciphertext), plaintext);
}

#[test]
fn reset_restarts_message() {
    let mut m = standard();
    let first = m.encrypt_str("REPEAT");
    m.reset();
    assert_eq!(m.encrypt_str("REPEAT"), first);
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn position_range_validation() {
    let mut m = standard();
    assert!(matches!(
        m.set_positions(0, 1, 1),
        Err(EnigmaError::OutOfRange { value: 0, .. })
    ));
    assert!(matches!(
        m.set_positions(27, 1, 1),
        Err(EnigmaError::OutOfRange { value: 27, .. })
    ));
    assert!(m.set_positions(1, 1, 1).is_ok());
}

#[test]
fn ring_range_validation() {
    let mut m = standard();
    assert!(m.set_ring_settings(1, 0, 1).is_err());
    assert!(m.set_ring_settings(1, 1, 27).is_err());
    assert!(m.set_ring_settings(26, 26, 26).is_ok());
}

#[test]
fn plugboard_symmetry_and_reuse() {
    let mut m = standard();
    m.add_plug_connection('A', 'B').unwrap();
    assert_eq!(m.plugboard().partner('A'), Some('B'));
    assert_eq!(m.plugboard().partner('B'), Some('A'));
    assert_eq!(
        m.add_plug_connection('A', 'C'),
        Err(EnigmaError::AlreadyConnected('A'))
    );
    assert_eq!(m.plugboard().partner('C'), None);
}

#[test]
fn plugboard_rejects_non_letters() {
    let mut m = standard();
    assert_eq!(
        m.add_plug_connection('A', '5'),
        Err(EnigmaError::InvalidLetter('5'))
    );
    assert!(m.plugboard().is_empty());
}

#[test]
fn construction_errors() {
    assert_eq!(
        Machine::new(&["I", "II"], "B").unwrap_err(),
        EnigmaError::WrongRotorCount(2)
    );
    assert_eq!(
        Machine::new(&["I", "II", "VIII"], "B").unwrap_err(),
        EnigmaError::UnknownRotor("VIII".into())
    );
    assert_eq!(
        Machine::new(&["I", "II", "III"], "Z").unwrap_err(),
        EnigmaError::UnknownReflector("Z".into())
    );
}

#[test]
fn custom_catalog_machine() {
    let mut catalog = Catalog::new();
    catalog
        .register_rotor("ID", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", 26)
        .unwrap();
    catalog
        .register_reflector("SWAP", "BADCFEHGJILKNMPORQTSVUXWZY")
        .unwrap();
    let mut m = Machine::with_catalog(&catalog, &["ID", "ID", "ID"], "SWAP").unwrap();
    // Identity rotors: the signal sees only the reflector.
    assert_eq!(m.encrypt_char('A'), 'B');
    assert_eq!(m.encrypt_char('D'), 'C');
    assert!(Machine::new(&["ID", "ID", "ID"], "B").is_err());
}
