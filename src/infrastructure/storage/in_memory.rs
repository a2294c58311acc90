//! In-memory repository implementations (for testing/development)

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::cache::{CacheAddress, CacheEntry, CacheRepository};
use crate::domain::query_log::{QueryLogEntry, QueryLogRepository};
use crate::domain::DomainError;

/// In-memory cache repository
#[derive(Debug, Default)]
pub struct InMemoryCacheRepository {
    entries: RwLock<HashMap<CacheAddress, CacheEntry>>,
}

impl InMemoryCacheRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CacheRepository for InMemoryCacheRepository {
    async fn find(&self, address: &CacheAddress) -> Result<Option<CacheEntry>, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(address).cloned())
    }

    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(entry.address.clone(), entry);
        Ok(())
    }
}

/// In-memory query log repository
#[derive(Debug, Default)]
pub struct InMemoryQueryLogRepository {
    entries: RwLock<Vec<QueryLogEntry>>,
}

impl InMemoryQueryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<QueryLogEntry> {
        self.entries.read().map(|e| e.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl QueryLogRepository for InMemoryQueryLogRepository {
    async fn append(&self, entry: QueryLogEntry) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(entry);
        Ok(())
    }
}
