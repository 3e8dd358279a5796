//! Command definitions
//!
//! Represents commands issued against a store.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Begin,
    Put,
    Get,
    Commit,
    Rollback,
}

impl CommandType {
    /// Canonical upper-case verb
    pub fn verb(&self) -> &'static str {
        match self {
            CommandType::Begin => "BEGIN",
            CommandType::Put => "PUT",
            CommandType::Get => "GET",
            CommandType::Commit => "COMMIT",
            CommandType::Rollback => "ROLLBACK",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a transaction
    Begin,

    /// Stage a write in the active transaction
    Put { key: String, value: i64 },

    /// Read a key (staged value first, then committed)
    Get { key: String },

    /// Apply the staged writes
    Commit,

    /// Discard the staged writes
    Rollback,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Begin => CommandType::Begin,
            Command::Put { .. } => CommandType::Put,
            Command::Get { .. } => CommandType::Get,
            Command::Commit => CommandType::Commit,
            Command::Rollback => CommandType::Rollback,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.command_type().verb();
        match self {
            Command::Put { key, value } => write!(f, "{} {} {}", verb, key, value),
            Command::Get { key } => write!(f, "{} {}", verb, key),
            _ => f.write_str(verb),
        }
    }
}

impl FromStr for Command {
    type Err = StoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();

        let verb = tokens
            .next()
            .ok_or_else(|| StoreError::Parse("empty command".to_string()))?;

        let args: Vec<&str> = tokens.collect();

        let command = match verb.to_ascii_uppercase().as_str() {
            "BEGIN" => {
                expect_arity(CommandType::Begin, &args, 0)?;
                Command::Begin
            }
            "PUT" => {
                expect_arity(CommandType::Put, &args, 2)?;
                let value = args[1].parse::<i64>().map_err(|e| {
                    StoreError::Parse(format!("PUT: invalid value '{}': {}", args[1], e))
                })?;
                Command::Put {
                    key: args[0].to_string(),
                    value,
                }
            }
            "GET" => {
                expect_arity(CommandType::Get, &args, 1)?;
                Command::Get {
                    key: args[0].to_string(),
                }
            }
            "COMMIT" => {
                expect_arity(CommandType::Commit, &args, 0)?;
                Command::Commit
            }
            "ROLLBACK" => {
                expect_arity(CommandType::Rollback, &args, 0)?;
                Command::Rollback
            }
            _ => {
                return Err(StoreError::Parse(format!("unknown command '{}'", verb)));
            }
        };

        Ok(command)
    }
}

fn expect_arity(command: CommandType, args: &[&str], expected: usize) -> Result<(), StoreError> {
    if args.len() != expected {
        return Err(StoreError::Parse(format!(
            "{}: expected {} argument(s), got {}",
            command.verb(),
            expected,
            args.len()
        )));
    }
    Ok(())
}
