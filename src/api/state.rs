//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CacheRepository, DomainError, Generation};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<dyn GenerationServiceTrait>,
    /// Held separately so the readiness probe can check storage
    /// connectivity without going through a generation.
    pub cache_repository: Arc<dyn CacheRepository>,
}

impl AppState {
    pub fn new(
        generation_service: Arc<dyn GenerationServiceTrait>,
        cache_repository: Arc<dyn CacheRepository>,
    ) -> Self {
        Self {
            generation_service,
            cache_repository,
        }
    }
}

/// Trait for the generation orchestrator
#[async_trait]
pub trait GenerationServiceTrait: Send + Sync {
    /// Generates topic items, served from the cache when possible.
    async fn generate(
        &self,
        topic: &str,
        exclude: Option<&str>,
    ) -> Result<Generation, DomainError>;
}
