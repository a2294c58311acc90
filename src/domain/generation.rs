//! Generation result types

use serde::{Deserialize, Serialize};

use crate::domain::TopicItem;

/// Where a generation's items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    Cache,
    Model,
}

impl std::fmt::Display for ItemSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cache => write!(f, "cache"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// A successful generation: the items plus their provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub items: Vec<TopicItem>,
    pub source: ItemSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(ItemSource::Cache.to_string(), "cache");
        assert_eq!(ItemSource::Model.to_string(), "model");
    }
}
