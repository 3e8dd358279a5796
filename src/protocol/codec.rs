//! Protocol codec
//!
//! Reading commands from and writing responses to line streams.

use std::io::{BufRead, Read, Write};

use crate::error::{Result, StoreError};
use super::{Command, Response};

/// Lines starting with this prefix are ignored
pub const COMMENT_PREFIX: char = '#';

/// Maximum command line size, excluding the newline (64 KB)
pub const MAX_LINE_SIZE: usize = 64 * 1024;

/// Parse a single command line
pub fn parse_command(line: &str) -> Result<Command> {
    line.trim().parse()
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read the next command from a stream
///
/// Blank lines and comments are skipped. Returns `Ok(None)` at end of input.
/// The outer `Result` carries I/O failures, the inner one parse failures, so
/// a caller can report a bad line and keep reading. Lines that are not valid
/// UTF-8 or longer than `MAX_LINE_SIZE` are parse failures.
pub fn read_command<R: BufRead>(reader: &mut R) -> Result<Option<Result<Command>>> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .by_ref()
            .take(MAX_LINE_SIZE as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }

        // Hit the cap before a newline: drop the rest of the line
        if buf.len() > MAX_LINE_SIZE && buf.last() != Some(&b'\n') {
            discard_line(reader)?;
            return Ok(Some(Err(StoreError::Parse(format!(
                "line too long (max {} bytes)",
                MAX_LINE_SIZE
            )))));
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                return Ok(Some(Err(StoreError::Parse(format!(
                    "invalid UTF-8 in command line: {}",
                    e
                )))));
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        return Ok(Some(parse_command(trimmed)));
    }
}

/// Consume input up to and including the next newline (or end of input)
fn discard_line<R: BufRead>(reader: &mut R) -> Result<()> {
    loop {
        let (found, used) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, available.len()),
            }
        };

        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

/// Write a response line to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writeln!(writer, "{}", response)?;
    writer.flush()?;
    Ok(())
}
