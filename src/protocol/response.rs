//! Response definitions
//!
//! Represents the outcome of a command.

use std::fmt;

use crate::error::Result;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

/// A response to report back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Command succeeded without a value
    Ok,

    /// Command succeeded with a value (GET)
    Value(i64),

    /// Command failed; carries the error message
    Error(String),
}

impl Response {
    /// Create an ERROR response
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error(message.into())
    }

    pub fn status(&self) -> Status {
        match self {
            Response::Ok | Response::Value(_) => Status::Ok,
            Response::Error(_) => Status::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status() == Status::Error
    }
}

impl From<Result<Option<i64>>> for Response {
    fn from(result: Result<Option<i64>>) -> Self {
        match result {
            Ok(Some(value)) => Response::Value(value),
            Ok(None) => Response::Ok,
            Err(e) => Response::error(e.to_string()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => f.write_str("OK"),
            Response::Value(value) => write!(f, "{}", value),
            Response::Error(message) => write!(f, "ERR {}", message),
        }
    }
}
