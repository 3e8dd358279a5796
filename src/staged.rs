//! Staged Writes
//!
//! The pending write-set of the active transaction.
//!
//! ## Responsibilities
//! - Hold uncommitted writes until commit or rollback
//! - Last write wins for a repeated key
//! - Hand its entries over to the committed store on commit
//!
//! A `StagedWrites` only exists while a transaction is active. The store
//! creates a fresh one on `begin` and consumes or drops it when the
//! transaction ends, so an idle store never carries staged entries.

use std::collections::hash_map;
use std::collections::HashMap;

/// Uncommitted key/value writes of a single transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedWrites {
    entries: HashMap<String, i64>,
}

impl StagedWrites {
    /// Create an empty write-set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty write-set with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Stage a write, returning the value previously staged for `key`
    pub fn put(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        self.entries.insert(key.into(), value)
    }

    /// Get the staged value for a key
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys staged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over staged entries (unordered)
    pub fn iter(&self) -> hash_map::Iter<'_, String, i64> {
        self.entries.iter()
    }
}

impl IntoIterator for StagedWrites {
    type Item = (String, i64);
    type IntoIter = hash_map::IntoIter<String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

