//! Append-only query log
//!
//! Records every generation request (cache hit or miss) by the same address
//! scheme the cache uses. Entries are never mutated or deleted, and the core
//! never reads them back; unbounded growth is an accepted tradeoff.

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cache::CacheAddress;
use crate::domain::DomainError;

/// One immutable query event.
///
/// `address` is not a foreign key: an entry may reference an address before
/// or independent of any stored cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub address: CacheAddress,
    pub timestamp: DateTime<Utc>,
}

impl QueryLogEntry {
    pub fn new(address: CacheAddress) -> Self {
        Self {
            address,
            timestamp: Utc::now(),
        }
    }
}

/// Repository for the append-only query log.
#[async_trait]
pub trait QueryLogRepository: Send + Sync + Debug {
    /// Appends one record. Callers treat failures as best-effort: a failed
    /// append never affects the generation request that triggered it.
    async fn append(&self, entry: QueryLogEntry) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock query log for testing
    #[derive(Debug, Default)]
    pub struct MockQueryLogRepository {
        entries: Mutex<Vec<QueryLogEntry>>,
        error: Mutex<Option<String>>,
    }

    impl MockQueryLogRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every append fail, simulating a storage outage.
        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        pub fn appended(&self) -> Vec<QueryLogEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueryLogRepository for MockQueryLogRepository {
        async fn append(&self, entry: QueryLogEntry) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::storage(error));
            }
            self.entries.lock().unwrap().push(entry);
            Ok(())
        }
    }
}
