//! Store Module
//!
//! The transactional store that coordinates committed and staged state.
//!
//! ## Responsibilities
//! - Track the transaction lifecycle (Idle / Active)
//! - Route writes into the staged write-set
//! - Resolve reads: staged first, then committed
//! - Apply or discard the staged write-set as one unit

use std::fmt;

use crate::committed::CommittedStore;
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::protocol::Command;
use crate::staged::StagedWrites;

/// Lifecycle state of the store's single transaction slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Idle,
    Active,
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionState::Idle => f.write_str("idle"),
            TransactionState::Active => f.write_str("active"),
        }
    }
}

/// In-memory key-value store with one staged transaction
///
/// ## State Machine
///
/// ```text
///            begin
///   Idle ───────────▶ Active ──┐ put
///    ▲                  │  ▲───┘
///    └──────────────────┘
///      commit / rollback
/// ```
///
/// `get` is legal in both states. Any other transition fails and leaves
/// the committed store, the staged writes and the state untouched.
///
/// The staged write-set lives inside `transaction`, so `Some` is exactly the
/// Active state and an idle store cannot hold staged entries.
#[derive(Debug, Default)]
pub struct TransactionalStore {
    /// Store configuration
    config: Config,

    /// Committed state, visible to every read
    committed: CommittedStore,

    /// Staged writes of the active transaction, if any
    transaction: Option<StagedWrites>,
}

impl TransactionalStore {
    /// Create an empty store with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty store with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            committed: CommittedStore::with_capacity(config.committed_capacity),
            transaction: None,
            config,
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation. Only GET yields a value.
    pub fn execute(&mut self, command: Command) -> Result<Option<i64>> {
        match command {
            Command::Begin => {
                self.begin()?;
                Ok(None)
            }
            Command::Put { key, value } => {
                self.put(key, value)?;
                Ok(None)
            }
            Command::Get { key } => self.get(&key).map(Some),
            Command::Commit => {
                self.commit()?;
                Ok(None)
            }
            Command::Rollback => {
                self.rollback()?;
                Ok(None)
            }
        }
    }

    /// Start a transaction
    ///
    /// Fails with `TransactionAlreadyActive` if one is in progress; the
    /// in-progress writes are kept as they are.
    pub fn begin(&mut self) -> Result<()> {
        if self.transaction.is_some() {
            return Err(StoreError::TransactionAlreadyActive);
        }

        self.transaction = Some(StagedWrites::with_capacity(self.config.staged_capacity));
        tracing::debug!("Transaction started");
        Ok(())
    }

    /// Stage a write in the active transaction
    ///
    /// Overwrites any value already staged for `key`. The committed store is
    /// not touched.
    pub fn put(&mut self, key: impl Into<String>, value: i64) -> Result<()> {
        let staged = self
            .transaction
            .as_mut()
            .ok_or(StoreError::NoActiveTransaction)?;

        let key = key.into();
        tracing::trace!(key = %key, value, "Staging write");
        staged.put(key, value);
        Ok(())
    }

    /// Get a value by key
    ///
    /// Search order:
    /// 1. Staged writes (only while a transaction is active)
    /// 2. Committed store
    pub fn get(&self, key: &str) -> Result<i64> {
        if let Some(value) = self.transaction.as_ref().and_then(|staged| staged.get(key)) {
            tracing::trace!(key, value, "Read from staged writes");
            return Ok(value);
        }

        match self.committed.get(key) {
            Some(value) => {
                tracing::trace!(key, value, "Read from committed store");
                Ok(value)
            }
            None => Err(StoreError::KeyNotFound(key.to_string())),
        }
    }

    /// Commit the active transaction
    ///
    /// Every staged write becomes visible in the committed store at once and
    /// the store returns to Idle.
    pub fn commit(&mut self) -> Result<()> {
        let staged = self
            .transaction
            .take()
            .ok_or(StoreError::NoActiveTransaction)?;

        let applied = self.committed.apply(staged);
        tracing::debug!(applied, "Transaction committed");
        Ok(())
    }

    /// Roll back the active transaction
    ///
    /// Discards the staged writes; the committed store is untouched.
    pub fn rollback(&mut self) -> Result<()> {
        let staged = self
            .transaction
            .take()
            .ok_or(StoreError::NoActiveTransaction)?;

        tracing::debug!(discarded = staged.len(), "Transaction rolled back");
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the current transaction state
    pub fn state(&self) -> TransactionState {
        if self.transaction.is_some() {
            TransactionState::Active
        } else {
            TransactionState::Idle
        }
    }

    /// Whether a transaction is in progress
    pub fn is_active(&self) -> bool {
        self.transaction.is_some()
    }

    /// Number of committed keys
    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    /// Number of keys staged in the active transaction (0 when idle)
    pub fn staged_len(&self) -> usize {
        self.transaction.as_ref().map_or(0, StagedWrites::len)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
