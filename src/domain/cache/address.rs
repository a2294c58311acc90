//! Content addressing for cached generations

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a normalized user prompt, used as the cache key.
///
/// Normalization is a leading/trailing whitespace trim only — no case
/// folding. Two prompts that differ in case or exclusion-list order address
/// different cache entries; that is accepted behavior, not a defect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheAddress(String);

impl CacheAddress {
    /// Computes the address for a prompt. Deterministic across calls and
    /// process restarts.
    pub fn from_prompt(prompt: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(prompt.trim().as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
