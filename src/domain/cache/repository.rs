//! Cache repository trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::{CacheAddress, CacheEntry};
use crate::domain::DomainError;

/// Repository for cached generations, keyed by content address.
///
/// Implementations must make `upsert` atomic per address: concurrent writes
/// to the same address leave one consistent winner, never a merged record.
#[async_trait]
pub trait CacheRepository: Send + Sync + Debug {
    /// Point lookup by address. A miss is `Ok(None)`; `Err` is reserved for
    /// storage connectivity or deserialization failures.
    async fn find(&self, address: &CacheAddress) -> Result<Option<CacheEntry>, DomainError>;

    /// Inserts the entry, or overwrites the existing entry at the same
    /// address.
    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError>;
}
