//! Terminal output writes
//!
//! The fixture writes to stdout in exactly two shapes: the greeting as a full line, and
//! probe output relayed byte-for-byte with nothing appended.

use crate::constants::GREETING;
use std::io::{self, Write};

/// Terminal output utility for the fixture's two stdout writes
pub struct TerminalOutput;

impl TerminalOutput {
    /// Write the greeting followed by a newline
    pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "{GREETING}")?;
        out.flush()
    }

    /// Write captured bytes verbatim; no newline, no formatting, no lossy decoding
    pub fn relay<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<usize> {
        if !bytes.is_empty() {
            out.write_all(bytes)?;
        }
        out.flush()?;
        Ok(bytes.len())
    }
}
