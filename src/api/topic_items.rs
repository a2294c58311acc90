//! Topic items endpoint handler

use axum::extract::State;
use tracing::info;

use super::state::{AppState, GenerationServiceTrait};
use super::types::{ApiError, Json, TopicItemsRequest, TopicItemsResponse};

/// POST /api/topicitems
pub async fn create_topic_items(
    State(state): State<AppState>,
    Json(request): Json<TopicItemsRequest>,
) -> Result<Json<TopicItemsResponse>, ApiError> {
    let topic = request
        .topic
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("topic is required"))?;

    // An empty exclusion list is the same as no exclusion.
    let butnot = request.butnot.as_deref().filter(|b| !b.is_empty());

    info!(topic = %topic, excluding = butnot.is_some(), "Processing topic items request");

    let generation = state.generation_service.generate(topic, butnot).await?;

    info!(
        topic = %topic,
        source = %generation.source,
        items = generation.items.len(),
        "Topic items generated"
    );

    Ok(Json(TopicItemsResponse {
        topic: topic.to_string(),
        items: generation.items,
    }))
}
