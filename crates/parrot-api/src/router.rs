//! Router configuration and server setup.

use std::future::Future;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
///
/// The webhook receiver is mounted at the configured webhook path.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let webhook_path = state.config.webhook_path.clone();

    Router::new()
        // Liveness
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Webhook management
        .route("/webhook/info", get(handlers::webhook_info))
        .route("/webhook/set", post(handlers::set_webhook))
        .route("/webhook/delete", post(handlers::delete_webhook))
        // Platform updates
        .route(&webhook_path, post(handlers::receive_update))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Registers the webhook, then serves until `shutdown` resolves.
///
/// A failed registration is logged and the server starts anyway, so the
/// registration can be retried through `POST /webhook/set`.
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting up...");
    if let Err(e) = handlers::register_webhook(&state).await {
        error!(error = %e, "Failed to register webhook on startup");
    }

    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on {}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down...");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use parrot_core::testing::MockPlatform;
    use parrot_core::Dispatcher;
    use serde_json::json;
    use std::sync::Arc;

    const WEBHOOK_URL: &str = "https://bot.example.com/webhook";

    fn make_test_server(config: ApiConfig) -> (TestServer, Arc<MockPlatform>) {
        let platform = Arc::new(MockPlatform::new());
        let state = AppState::new(config, platform.clone(), Dispatcher::standard(None));
        let server = TestServer::new(create_router(state)).unwrap();
        (server, platform)
    }

    fn configured() -> ApiConfig {
        ApiConfig::default().with_webhook("/webhook", Some(WEBHOOK_URL.to_string()))
    }

    fn text_update(text: &str) -> serde_json::Value {
        json!({
            "update_id": 424242,
            "message": {
                "message_id": 17,
                "date": 1700000000,
                "chat": {
                    "id": 555,
                    "type": "private",
                    "first_name": "Ada"
                },
                "from": {
                    "id": 555,
                    "is_bot": false,
                    "first_name": "Ada",
                    "last_name": "Lovelace"
                },
                "text": text
            }
        })
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let (server, _) = make_test_server(configured());

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "active");
        assert_eq!(body["webhook_configured"], true);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = make_test_server(ApiConfig::default());

        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_webhook_dispatches_update() {
        let (server, platform) = make_test_server(configured());

        let response = server.post("/webhook").json(&text_update("/echo hello world")).await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));

        assert_eq!(
            platform.sent().await,
            vec![(555, "Echo: hello world".to_string())]
        );
    }

    #[tokio::test]
    async fn test_webhook_custom_path() {
        let config = ApiConfig::default().with_webhook("/tg/secret-path", None);
        let (server, platform) = make_test_server(config);

        server
            .post("/tg/secret-path")
            .json(&text_update("banana"))
            .await
            .assert_status_ok();
        assert_eq!(platform.sent().await[0].1, "You said: banana");

        server
            .post("/webhook")
            .json(&text_update("banana"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_webhook_rejects_non_json() {
        let (server, platform) = make_test_server(configured());

        let response = server.post("/webhook").text("this is not json").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("bad request"));
        assert!(platform.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_webhook_rejects_malformed_message() {
        let (server, platform) = make_test_server(configured());

        for body in [
            json!({"update_id": 1, "message": "garbage"}),
            json!({"update_id": 1, "message": {"text": "hi"}}),
        ] {
            server
                .post("/webhook")
                .json(&body)
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
        assert!(platform.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_webhook_acks_update_without_message() {
        let (server, platform) = make_test_server(configured());

        let response = server.post("/webhook").json(&json!({"update_id": 1})).await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));
        assert!(platform.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_webhook_acks_when_send_fails() {
        let (server, platform) = make_test_server(configured());
        platform.fail_sends();

        let response = server.post("/webhook").json(&text_update("/help")).await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_webhook_info_endpoint() {
        let (server, platform) = make_test_server(configured());
        platform.set_registered_webhook(WEBHOOK_URL).await;

        let response = server.get("/webhook/info").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["url"], WEBHOOK_URL);
        assert_eq!(body["pending_update_count"], 0);
        assert_eq!(body["max_connections"], 40);
        assert!(body["last_error_message"].is_null());
        assert!(body.get("allowed_updates").is_some());
    }

    #[tokio::test]
    async fn test_webhook_info_failure() {
        let (server, platform) = make_test_server(configured());
        platform.fail_webhook();

        let response = server.get("/webhook/info").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_set_and_delete_webhook() {
        let (server, platform) = make_test_server(configured());

        let response = server.post("/webhook/set").await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "webhook set successfully"}));
        assert_eq!(
            platform.registered_webhook().await.as_deref(),
            Some(WEBHOOK_URL)
        );

        let response = server.post("/webhook/delete").await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "webhook deleted successfully"}));
        assert_eq!(platform.registered_webhook().await, None);
    }

    #[tokio::test]
    async fn test_delete_webhook_failure() {
        let (server, platform) = make_test_server(configured());
        platform.fail_webhook();

        server
            .post("/webhook/delete")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let (server, _) = make_test_server(ApiConfig::default());

        let response = server.get("/health").await;
        assert!(response.headers().contains_key("access-control-allow-origin"));
    }
}
