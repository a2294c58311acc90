//! Cached generation entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CacheAddress;
use crate::domain::TopicItem;

/// A cached generation, keyed by the address of its prompt.
///
/// At most one entry exists per address; writing an existing address
/// overwrites `prompt`, `items`, and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Content address of `prompt`. Primary key.
    pub address: CacheAddress,
    /// The exact user-prompt text that produced this entry, kept for
    /// debugging and audit.
    pub prompt: String,
    /// The generated items, in model output order.
    pub items: Vec<TopicItem>,
    /// Time of the last write.
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates an entry for a prompt, computing its address and stamping
    /// the current time.
    pub fn new(prompt: impl Into<String>, items: Vec<TopicItem>) -> Self {
        let prompt = prompt.into();
        Self {
            address: CacheAddress::from_prompt(&prompt),
            prompt,
            items,
            created_at: Utc::now(),
        }
    }
}
