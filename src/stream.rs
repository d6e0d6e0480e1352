//! Line-oriented transcription.
//!
//! Reads text line by line, pushes every character through the machine in
//! order and writes one output line per input line.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::machine::Machine;

/// Encrypts every line of `reader` into `writer`.
///
/// Each line is uppercased before encryption. Line terminators (`\n` or
/// `\r\n`) are not passed to the machine; each output line ends with `\n`.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and pass through
/// as non-letters.
///
/// # Returns
/// The number of lines processed.
///
/// # Errors
/// Propagates any read or write error. Malformed UTF-8 is not an error.
///
/// # Examples
///
/// ```
/// use enigma::{stream, Machine};
///
/// let mut m = Machine::new(&["I", "II", "III"], "B").unwrap();
/// let mut out = Vec::new();
/// stream::transcribe(&mut m, "hello\nworld\n".as_bytes(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "ILBDA\nAMTAZ\n");
/// ```
pub fn transcribe<R: BufRead, W: Write>(
    machine: &mut Machine,
    mut reader: R,
    mut writer: W,
) -> io::Result<usize> {
    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_terminator(&buf);
        let output = machine.encrypt_str(&String::from_utf8_lossy(line));
        writeln!(writer, "{}", output)?;
        count += 1;
    }
    writer.flush()?;
    debug!(lines = count, window = %machine.window(), "transcription finished");
    Ok(count)
}

/// Drops a trailing `\n` or `\r\n`.
fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
