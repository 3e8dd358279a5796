//! Session Handler
//!
//! Drives a store from a stream of command lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Result;
use crate::protocol::{read_command, write_response, Response};
use crate::store::TransactionalStore;

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands read (including ones that failed to parse)
    pub commands: usize,

    /// Commands answered with an error
    pub errors: usize,
}

/// Handles a single command stream against its own store
pub struct Session<R, W> {
    /// Command source
    reader: R,

    /// Response sink
    writer: W,

    /// The store this session drives
    store: TransactionalStore,

    /// Optional prompt written before each command is read
    prompt: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over a fresh store
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_store(reader, writer, TransactionalStore::new())
    }

    /// Create a session over an existing store
    pub fn with_store(reader: R, writer: W, store: TransactionalStore) -> Self {
        Self {
            reader,
            writer,
            store,
            prompt: None,
        }
    }

    /// Write `prompt` before reading each command
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Run the session (blocking until end of input)
    ///
    /// Parse and store errors are written as `ERR` lines and the loop
    /// continues. Only I/O errors end the session early.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.writer, "{}", prompt)?;
                self.writer.flush()?;
            }

            let parsed = match read_command(&mut self.reader)? {
                Some(parsed) => parsed,
                None => {
                    // End the dangling prompt line
                    if self.prompt.is_some() {
                        writeln!(self.writer)?;
                        self.writer.flush()?;
                    }
                    break;
                }
            };
            summary.commands += 1;

            let response = match parsed {
                Ok(command) => {
                    tracing::trace!("Executing {}", command);
                    Response::from(self.store.execute(command))
                }
                Err(e) => Response::error(e.to_string()),
            };

            if response.is_error() {
                summary.errors += 1;
                tracing::debug!("Command failed: {}", response);
            }

            write_response(&mut self.writer, &response)?;
        }

        if self.store.is_active() {
            tracing::warn!(
                "Session ended with transaction {} holding {} uncommitted write(s)",
                self.store.state(),
                self.store.staged_len()
            );
        }

        tracing::info!(
            "Session finished: {} command(s), {} error(s)",
            summary.commands,
            summary.errors
        );

        Ok(summary)
    }

    /// Get the store this session drives
    pub fn store(&self) -> &TransactionalStore {
        &self.store
    }

    /// Consume the session, returning the store and the response sink
    pub fn into_parts(self) -> (TransactionalStore, W) {
        (self.store, self.writer)
    }
}

impl<W: Write> Session<BufReader<File>, W> {
    /// Create a session reading commands from a script file
    pub fn from_path(path: &Path, writer: W, store: TransactionalStore) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::with_store(BufReader::new(file), writer, store))
    }
}
