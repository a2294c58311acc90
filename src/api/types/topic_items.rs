//! Request and response types for the topic items endpoint

use serde::{Deserialize, Serialize};

use crate::domain::TopicItem;

/// Body of `POST /api/topicitems`
#[derive(Debug, Clone, Deserialize)]
pub struct TopicItemsRequest {
    /// The topic to generate items for. Required.
    #[serde(default)]
    pub topic: Option<String>,
    /// Items to exclude from the generation. Optional.
    #[serde(default)]
    pub butnot: Option<String>,
}

/// Successful response: the echoed topic plus the generated items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicItemsResponse {
    pub topic: String,
    pub items: Vec<TopicItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_without_butnot() {
        let request: TopicItemsRequest =
            serde_json::from_str(r#"{"topic": "planets"}"#).unwrap();
        assert_eq!(request.topic.as_deref(), Some("planets"));
        assert!(request.butnot.is_none());
    }

    #[test]
    fn test_request_deserializes_with_butnot() {
        let request: TopicItemsRequest =
            serde_json::from_str(r#"{"topic": "birds", "butnot": "eagle"}"#).unwrap();
        assert_eq!(request.butnot.as_deref(), Some("eagle"));
    }

    #[test]
    fn test_request_tolerates_missing_topic() {
        let request: TopicItemsRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.topic.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let response = TopicItemsResponse {
            topic: "planets".to_string(),
            items: vec![TopicItem::new("Mercury", "The closest planet. It is small.")],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"topic\":\"planets\""));
        assert!(json.contains("\"name\":\"Mercury\""));
        assert!(json.contains("\"desc\":"));
    }
}
