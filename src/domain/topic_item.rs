//! Topic items and strict parsing of model output

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single generated item: a name and its two-part description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicItem {
    pub name: String,
    pub desc: String,
}

impl TopicItem {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }
}

/// Parses raw model output as a JSON array of `{name, desc}` objects.
///
/// Strict schema validation: missing fields, extra fields, wrong types, or
/// anything other than a top-level array is rejected with
/// [`DomainError::InvalidModelOutput`]. No coercion is attempted, so a
/// rejected response is never cached.
pub fn parse_topic_items(raw: &str) -> Result<Vec<TopicItem>, DomainError> {
    serde_json::from_str(raw.trim()).map_err(|e| {
        DomainError::invalid_model_output(format!("response is not a valid item list: {}", e))
    })
}
