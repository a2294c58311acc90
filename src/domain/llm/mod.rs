//! LLM provider abstraction and chat types

pub mod message;
pub mod provider;
pub mod request;
pub mod response;

pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{LlmRequest, LlmRequestBuilder};
pub use response::{FinishReason, LlmResponse, Usage};
