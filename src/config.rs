// Runtime configuration read from the environment.
//
// Responsibilities
// - Hold the store's soft capacity and eviction batch size, both non-zero.
// - Hold the listen address of the HTTP shell.
// - Parse from any key lookup so tests do not have to touch the process environment.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use thiserror::Error;

pub const CAPACITY_VAR: &str = "TASK_STORE_CAPACITY";
pub const LEGACY_CAPACITY_VAR: &str = "MAX_TASKS";
pub const EVICTION_BATCH_SIZE_VAR: &str = "TASK_STORE_EVICTION_BATCH_SIZE";
pub const ADDR_VAR: &str = "TASK_STORE_ADDR";

const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();
const DEFAULT_EVICTION_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(1_000).unwrap();
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    NotPositive { key: String, value: String },

    #[error("{key} must be a socket address, got {value:?}")]
    InvalidAddr { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Soft target. The store may stay above it when too few tasks are completed.
    pub capacity: NonZeroUsize,
    pub eviction_batch_size: NonZeroUsize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            eviction_batch_size: DEFAULT_EVICTION_BATCH_SIZE,
        }
    }
}

impl StoreConfig {
    pub fn new(capacity: usize, eviction_batch_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            capacity: positive("capacity", &capacity.to_string())?,
            eviction_batch_size: positive("eviction_batch_size", &eviction_batch_size.to_string())?,
        })
    }

    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_eviction_batch_size(mut self, eviction_batch_size: NonZeroUsize) -> Self {
        self.eviction_batch_size = eviction_batch_size;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let capacity = lookup(CAPACITY_VAR)
            .map(|v| (CAPACITY_VAR, v))
            .or_else(|| lookup(LEGACY_CAPACITY_VAR).map(|v| (LEGACY_CAPACITY_VAR, v)));
        if let Some((key, value)) = capacity {
            config.capacity = positive(key, &value)?;
        }
        if let Some(value) = lookup(EVICTION_BATCH_SIZE_VAR) {
            config.eviction_batch_size = positive(EVICTION_BATCH_SIZE_VAR, &value)?;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub addr: SocketAddr,
    pub store: StoreConfig,
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            key: ADDR_VAR.to_string(),
            value: raw.clone(),
        })?;
        Ok(Self {
            addr,
            store: StoreConfig::from_lookup(lookup)?,
        })
    }
}

fn positive(key: &str, value: &str) -> Result<NonZeroUsize, ConfigError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::NotPositive {
            key: key.to_string(),
            value: value.to_string(),
        })
}
