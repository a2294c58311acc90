//! Generation orchestration: prompt → cache → model → cache → query log

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::cache::{CacheAddress, CacheEntry, CacheRepository};
use crate::domain::query_log::{QueryLogEntry, QueryLogRepository};
use crate::domain::{
    parse_topic_items, prompt, DomainError, Generation, ItemSource, LlmProvider, LlmRequest,
};

/// Model selection and output budget for generation calls.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub model: String,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 1000,
        }
    }
}

/// Orchestrates topic item generation over injected cache, query log, and
/// LLM provider dependencies.
///
/// Storage failures are absorbed here: a failed lookup degrades to a miss
/// and a failed store or log append to a no-op, so a storage outage reduces
/// the service to "always call the model" rather than a hard failure. Model
/// and parse failures propagate to the caller; there is no fallback content.
#[derive(Debug)]
pub struct GenerationService {
    llm: Arc<dyn LlmProvider>,
    cache: Arc<dyn CacheRepository>,
    query_log: Arc<dyn QueryLogRepository>,
    config: GenerationConfig,
}

impl GenerationService {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        cache: Arc<dyn CacheRepository>,
        query_log: Arc<dyn QueryLogRepository>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            llm,
            cache,
            query_log,
            config,
        }
    }

    /// Best-effort append; a failed log write never affects the request.
    async fn log_query(&self, address: &CacheAddress) {
        if let Err(e) = self.query_log.append(QueryLogEntry::new(address.clone())).await {
            warn!(address = %address, error = %e, "Failed to append query log entry");
        }
    }
}

#[async_trait]
impl crate::api::state::GenerationServiceTrait for GenerationService {
    async fn generate(
        &self,
        topic: &str,
        exclude: Option<&str>,
    ) -> Result<Generation, DomainError> {
        let user_prompt = prompt::user_prompt(topic, exclude);
        let address = CacheAddress::from_prompt(&user_prompt);

        match self.cache.find(&address).await {
            Ok(Some(entry)) => {
                info!(address = %address, "Cache hit");
                self.log_query(&address).await;
                return Ok(Generation {
                    items: entry.items,
                    source: ItemSource::Cache,
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!(address = %address, error = %e, "Cache lookup failed, treating as miss");
            }
        }

        info!(address = %address, model = %self.config.model, "Cache miss, calling model");

        let request = LlmRequest::builder()
            .system(prompt::system_prompt())
            .user(user_prompt.clone())
            .max_tokens(self.config.max_output_tokens)
            .build();

        let response = self.llm.chat(&self.config.model, request).await?;

        if let Some(usage) = &response.usage {
            info!(
                address = %address,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Model call completed"
            );
        }

        // Rejected output is never cached.
        let items = parse_topic_items(response.content())?;

        if let Err(e) = self
            .cache
            .upsert(CacheEntry::new(user_prompt, items.clone()))
            .await
        {
            warn!(address = %address, error = %e, "Failed to store generation in cache");
        }
        self.log_query(&address).await;

        Ok(Generation {
            items,
            source: ItemSource::Model,
        })
    }
}
