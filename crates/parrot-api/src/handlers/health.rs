//! Liveness handlers.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::{RootResponse, StatusResponse};

/// GET / - Service summary.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Parrot bot is running!".to_string(),
        status: "active".to_string(),
        webhook_configured: state.config.webhook_configured(),
    })
}

/// GET /health - Health check endpoint.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::new("healthy"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use parrot_core::testing::MockPlatform;
    use parrot_core::Dispatcher;
    use std::sync::Arc;

    fn make_test_state(config: ApiConfig) -> AppState {
        AppState::new(
            config,
            Arc::new(MockPlatform::new()),
            Dispatcher::standard(None),
        )
    }

    #[tokio::test]
    async fn test_root_without_webhook() {
        let state = make_test_state(ApiConfig::default());
        let response = root(State(state)).await;

        assert_eq!(response.status, "active");
        assert!(!response.webhook_configured);
    }

    #[tokio::test]
    async fn test_root_with_webhook() {
        let config = ApiConfig::default()
            .with_webhook("/webhook", Some("https://bot.example.com/webhook".into()));
        let response = root(State(make_test_state(config))).await;

        assert!(response.webhook_configured);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health().await;
        assert_eq!(response.status, "healthy");
    }
}
