//! API request/response types

pub mod error;
pub mod json;
pub mod topic_items;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use topic_items::{TopicItemsRequest, TopicItemsResponse};
