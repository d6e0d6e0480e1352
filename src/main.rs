//! Command-line Enigma.
//!
//! Reads plaintext (or ciphertext) from stdin and writes the transformed
//! text to stdout, one line per input line.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use enigma::settings::{parse_plug_pairs, parse_rotor_list};
use enigma::{stream, Settings};

#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Three-rotor Enigma cipher machine", long_about = None)]
struct Cli {
    /// Rotor selection, leftmost first (e.g. I,II,III)
    #[arg(long, default_value = "I,II,III")]
    rotors: String,

    /// Reflector type (A, B or C)
    #[arg(long, default_value = "B")]
    reflector: String,

    /// Position of the left rotor (1-26)
    #[arg(long = "r1", default_value_t = 1, allow_negative_numbers = true)]
    r1: i32,

    /// Position of the middle rotor (1-26)
    #[arg(long = "r2", default_value_t = 1, allow_negative_numbers = true)]
    r2: i32,

    /// Position of the right rotor (1-26)
    #[arg(long = "r3", default_value_t = 1, allow_negative_numbers = true)]
    r3: i32,

    /// Ring setting of the left rotor (1-26)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    ring1: i32,

    /// Ring setting of the middle rotor (1-26)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    ring2: i32,

    /// Ring setting of the right rotor (1-26)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    ring3: i32,

    /// Plugboard connections (e.g. "AB CD EF")
    #[arg(short = 'p', long = "plugboard", default_value = "")]
    plugboard: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            rotors: parse_rotor_list(&self.rotors),
            reflector: self.reflector.clone(),
            positions: [self.r1, self.r2, self.r3],
            rings: [self.ring1, self.ring2, self.ring3],
            plugs: parse_plug_pairs(&self.plugboard)?,
        })
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut machine = cli.settings()?.build()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    stream::transcribe(&mut machine, stdin.lock(), stdout.lock())
        .context("error processing input")?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
