//! # StageKV
//!
//! An in-memory key-value store with:
//! - A committed base mapping visible to every read
//! - One staged transaction at a time (no nesting)
//! - Atomic commit and rollback of the staged write-set
//! - A line-oriented command language for scripting and REPL use
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Session / CLI                              │
//! │             (command lines in, responses out)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                TransactionalStore                            │
//! │          (Idle ⇄ Active state machine)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐   commit  ┌─────────────┐
//!   │   Staged    │──────────▶│  Committed  │
//!   │   Writes    │           │    Store    │
//!   └─────────────┘           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use stagekv::{StoreError, TransactionalStore};
//!
//! let mut store = TransactionalStore::new();
//! store.begin()?;
//! store.put("A", 5)?;
//! store.commit()?;
//! assert_eq!(store.get("A")?, 5);
//!
//! store.begin()?;
//! store.put("B", 20)?;
//! store.rollback()?;
//! assert!(matches!(store.get("B"), Err(StoreError::KeyNotFound(_))));
//! # Ok::<(), StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod staged;
pub mod committed;
pub mod protocol;
pub mod store;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use store::{TransactionState, TransactionalStore};
pub use session::{Session, SessionSummary};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of StageKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
