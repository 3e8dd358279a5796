//! Protocol Module
//!
//! Defines the line-oriented command language used to drive a store.
//!
//! ## Request Format
//! One command per line, verbs are case-insensitive:
//! ```text
//! BEGIN
//! PUT <key> <value>
//! GET <key>
//! COMMIT
//! ROLLBACK
//! ```
//!
//! Keys are a single whitespace-free token, values are signed 64-bit
//! integers.
//!
//! ## Response Format
//! One line per command:
//! - `OK`            - the command succeeded without a value
//! - `<integer>`     - the value returned by GET
//! - `ERR <message>` - the command failed; the store is unchanged

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{Response, Status};
pub use codec::{parse_command, read_command, write_response, COMMENT_PREFIX, MAX_LINE_SIZE};
