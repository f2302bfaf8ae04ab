use crate::error::Result;
use crate::sequence::Sequence;
use log::debug;
use std::io::{self, Write};

/// Writes the first `length` elements of `sequence`, one decimal value per
/// line, in index order.
pub fn print_array<W: Write>(sequence: &Sequence, length: usize, out: &mut W) -> Result<()> {
    let values = sequence.prefix(length)?;

    for value in values {
        writeln!(out, "{}", value)?;
    }
    out.flush()?;

    debug!("Printed {} elements", values.len());
    Ok(())
}

/// Prints the first `length` elements of `sequence` to stdout.
pub fn print_to_stdout(sequence: &Sequence, length: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_array(sequence, length, &mut handle)
}
