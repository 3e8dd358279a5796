//! Configuration for StageKV
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a StageKV store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Committed Store Configuration
    // -------------------------------------------------------------------------
    /// Number of keys the committed store pre-allocates room for
    pub committed_capacity: usize,

    // -------------------------------------------------------------------------
    // Transaction Configuration
    // -------------------------------------------------------------------------
    /// Number of keys each new staged write-set pre-allocates room for
    pub staged_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            committed_capacity: 0,
            staged_capacity: 16,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial capacity of the committed store
    pub fn committed_capacity(mut self, capacity: usize) -> Self {
        self.config.committed_capacity = capacity;
        self
    }

    /// Set the initial capacity of each transaction's staged writes
    pub fn staged_capacity(mut self, capacity: usize) -> Self {
        self.config.staged_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
