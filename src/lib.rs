//! Namesmith API
//!
//! A topic item generation service: callers post a topic, an LLM generates a
//! list of (name, description) pairs, and results are cached by a content
//! address of the exact prompt text so repeated requests skip the paid model
//! call. Every request is recorded in an append-only query log keyed by the
//! same address.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::{CacheRepository, LlmProvider, QueryLogRepository};
use infrastructure::llm::LlmProviderFactory;
use infrastructure::services::{GenerationConfig, GenerationService};
use infrastructure::storage::{
    InMemoryCacheRepository, InMemoryQueryLogRepository, PostgresCacheRepository, PostgresConfig,
    PostgresQueryLogRepository, StorageBackend,
};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let llm_provider = create_llm_provider(&config.llm)?;
    let (cache_repository, query_log_repository) = create_repositories(&config.storage).await?;

    let generation_service = Arc::new(GenerationService::new(
        llm_provider,
        cache_repository.clone(),
        query_log_repository,
        GenerationConfig {
            model: config.llm.model.clone(),
            max_output_tokens: config.llm.max_output_tokens,
        },
    ));

    Ok(AppState::new(generation_service, cache_repository))
}

fn create_llm_provider(config: &config::LlmConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable is required"))?;

    match &config.base_url {
        Some(url) => {
            info!("Using OpenAI provider with custom base URL: {}", url);
            Ok(LlmProviderFactory::create_openai_with_base_url(api_key, url))
        }
        None => {
            info!("Using OpenAI provider with default base URL");
            Ok(LlmProviderFactory::create_openai(api_key))
        }
    }
}

async fn create_repositories(
    config: &config::StorageConfig,
) -> anyhow::Result<(Arc<dyn CacheRepository>, Arc<dyn QueryLogRepository>)> {
    let backend = StorageBackend::parse(&config.backend)
        .ok_or_else(|| anyhow::anyhow!("Unknown storage backend: {}", config.backend))?;

    match backend {
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL").map_err(|_| {
                anyhow::anyhow!(
                    "DATABASE_URL environment variable is required for the postgres backend"
                )
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = PostgresConfig::new(database_url).connect().await?;
            info!("PostgreSQL connection established");

            let cache = PostgresCacheRepository::new(pool.clone());
            cache.ensure_table().await?;

            let query_log = PostgresQueryLogRepository::new(pool);
            query_log.ensure_table().await?;

            Ok((Arc::new(cache), Arc::new(query_log)))
        }
        StorageBackend::InMemory => {
            info!("Using in-memory storage (entries are lost on restart)");
            Ok((
                Arc::new(InMemoryCacheRepository::new()),
                Arc::new(InMemoryQueryLogRepository::new()),
            ))
        }
    }
}
