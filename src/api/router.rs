//! HTTP router and CORS configuration

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::topic_items;
use super::types::Json;
use crate::config::CorsConfig;
use crate::domain::DomainError;

/// Create the application router
pub fn create_router_with_state(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", api_router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn api_router() -> Router<AppState> {
    Router::new().route("/topicitems", post(topic_items::create_topic_items))
}

async fn home() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the API!" }))
}

/// Builds the CORS layer from validated configuration.
///
/// Configured origins must parse as header values; `AppConfig::validate`
/// has already enforced the HTTPS-only rule for non-development origins.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, DomainError> {
    let mut origins: Vec<HeaderValue> = Vec::new();

    for origin in config.origins() {
        let value = origin.parse::<HeaderValue>().map_err(|_| {
            DomainError::configuration(format!("Invalid CORS origin: {}", origin))
        })?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cors_layer_with_valid_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            allow_dev_origins: false,
        };

        assert!(build_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_build_cors_layer_rejects_unparseable_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["https://bad\norigin".to_string()],
            allow_dev_origins: false,
        };

        assert!(matches!(
            build_cors_layer(&config),
            Err(DomainError::Configuration { .. })
        ));
    }
}
