//! Interactive prompting for input file locations.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompt shown when the flight data path was not given on the command line.
pub const FLIGHT_DATA_PROMPT: &str = "Enter flight data: ";
/// Prompt shown when the request file path was not given on the command line.
pub const REQUEST_FILE_PROMPT: &str = "Enter requested file: ";

/// Return `given` when present, otherwise ask for a path on `input`.
pub fn resolve_path<R: BufRead, W: Write>(
    given: Option<PathBuf>,
    label: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    match given {
        Some(path) => Ok(path),
        None => prompt_for_path(label, input, output),
    }
}

/// Write `label`, then read the next non-blank line as a path.
pub fn prompt_for_path<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    writeln!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer given for prompt '{}'", label.trim_end()),
            ));
        }
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(PathBuf::from(answer));
        }
    }
}
