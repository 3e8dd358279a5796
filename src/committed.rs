//! Committed Store
//!
//! The base mapping every reader sees once a transaction commits.
//!
//! ## Responsibilities
//! - Serve reads that no staged write shadows
//! - Absorb a whole staged write-set in one `apply` call
//!
//! Writes only arrive through `apply`.

use std::collections::HashMap;

use crate::staged::StagedWrites;

/// Committed key/value state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommittedStore {
    entries: HashMap<String, i64>,
}

impl CommittedStore {
    /// Create an empty committed store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty committed store with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Get the committed value for a key
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of committed keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply a staged write-set
    ///
    /// Staged values overwrite committed values of the same key; keys that
    /// were not staged are untouched. Returns the number of entries applied.
    pub fn apply(&mut self, staged: StagedWrites) -> usize {
        let applied = staged.len();
        self.entries.extend(staged);
        applied
    }
}

