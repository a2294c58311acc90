//! HTTP surface tests against the full router with in-memory storage and a
//! stub LLM provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use namesmith_api::api::{build_cors_layer, create_router_with_state, AppState};
use namesmith_api::config::CorsConfig;
use namesmith_api::domain::{
    DomainError, LlmProvider, LlmRequest, LlmResponse, Message, TopicItem,
};
use namesmith_api::infrastructure::services::{GenerationConfig, GenerationService};
use namesmith_api::infrastructure::storage::{
    InMemoryCacheRepository, InMemoryQueryLogRepository,
};

/// Stub provider returning a fixed body, counting calls.
#[derive(Debug)]
struct StubLlmProvider {
    body: String,
    calls: AtomicUsize,
}

impl StubLlmProvider {
    fn new(body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            body: body.into(),
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubLlmProvider {
    async fn chat(&self, model: &str, _request: LlmRequest) -> Result<LlmResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LlmResponse::new(
            "stub-response".to_string(),
            model.to_string(),
            Message::assistant(self.body.clone()),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

fn twenty_items_json() -> String {
    let items: Vec<TopicItem> = (1..=20)
        .map(|i| TopicItem::new(format!("Item{i}"), format!("Thing number {i}. It is plain.")))
        .collect();
    serde_json::to_string(&items).unwrap()
}

fn build_app(llm: Arc<StubLlmProvider>) -> Router {
    let cache = Arc::new(InMemoryCacheRepository::new());
    let query_log = Arc::new(InMemoryQueryLogRepository::new());

    let generation_service = Arc::new(GenerationService::new(
        llm,
        cache.clone(),
        query_log,
        GenerationConfig::default(),
    ));

    let cors = build_cors_layer(&CorsConfig::default()).unwrap();
    create_router_with_state(AppState::new(generation_service, cache), cors)
}

async fn post_topic_items(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/topicitems")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_home_returns_welcome() {
    let app = build_app(StubLlmProvider::new("[]"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "Welcome to the API!");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = build_app(StubLlmProvider::new("[]"));

    for uri in ["/health", "/ready", "/live"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_missing_topic_returns_400() {
    let llm = StubLlmProvider::new(twenty_items_json());
    let app = build_app(llm.clone());

    let (status, json) = post_topic_items(&app, r#"{"butnot": "eagle"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "topic is required");
    // The orchestrator is never invoked.
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_empty_topic_returns_400() {
    let app = build_app(StubLlmProvider::new(twenty_items_json()));

    let (status, json) = post_topic_items(&app, r#"{"topic": "   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "topic is required");
}

#[tokio::test]
async fn test_generation_returns_items() {
    let llm = StubLlmProvider::new(twenty_items_json());
    let app = build_app(llm.clone());

    let (status, json) = post_topic_items(&app, r#"{"topic": "planets"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "planets");
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["name"], "Item1");
    assert!(items[0]["desc"].is_string());
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn test_repeated_request_served_from_cache() {
    let llm = StubLlmProvider::new(twenty_items_json());
    let app = build_app(llm.clone());

    let (_, first) = post_topic_items(&app, r#"{"topic": "planets"}"#).await;
    let (status, second) = post_topic_items(&app, r#"{"topic": "planets"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
    // The model was only consulted once.
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn test_butnot_requests_are_cached_separately() {
    let llm = StubLlmProvider::new(twenty_items_json());
    let app = build_app(llm.clone());

    post_topic_items(&app, r#"{"topic": "birds"}"#).await;
    let (status, _) = post_topic_items(&app, r#"{"topic": "birds", "butnot": "eagle"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(llm.call_count(), 2);
}

#[tokio::test]
async fn test_unparseable_model_output_returns_500() {
    let llm = StubLlmProvider::new("I'd be happy to help with that!");
    let app = build_app(llm.clone());

    let (status, json) = post_topic_items(&app, r#"{"topic": "planets"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("Invalid model output"));

    // Nothing was cached: a retry hits the model again.
    post_topic_items(&app, r#"{"topic": "planets"}"#).await;
    assert_eq!(llm.call_count(), 2);
}

#[tokio::test]
async fn test_malformed_json_body_returns_client_error() {
    let app = build_app(StubLlmProvider::new("[]"));

    let (status, json) = post_topic_items(&app, "{not json").await;

    assert!(status.is_client_error());
    assert!(json["error"].is_string());
}
