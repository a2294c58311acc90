//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod generation;
pub mod llm;
pub mod prompt;
pub mod query_log;
pub mod topic_item;

pub use cache::{CacheAddress, CacheEntry, CacheRepository};
pub use error::DomainError;
pub use generation::{Generation, ItemSource};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    Usage,
};
pub use query_log::{QueryLogEntry, QueryLogRepository};
pub use topic_item::{parse_topic_items, TopicItem};
