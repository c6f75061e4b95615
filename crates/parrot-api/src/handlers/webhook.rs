//! Webhook receiver and webhook management handlers.

use axum::{body::Bytes, extract::State, Json};
use parrot_telegram::convert::{convert_update, parse_update};
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{StatusResponse, WebhookInfoResponse};

/// POST <webhook_path> - Receive one update from the platform.
///
/// Malformed bodies are rejected with 400. Once the update parses, the
/// platform always gets a success response, even if the reply could not
/// be delivered.
pub async fn receive_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusResponse>> {
    let update = parse_update(&body).map_err(|e| {
        error!(error = %e, "Error processing webhook");
        ApiError::BadRequest("invalid update payload".to_string())
    })?;

    let update = convert_update(&update);
    match update.message {
        Some(message) => {
            // Send failures are already logged by the dispatcher.
            let _ = state
                .dispatcher
                .handle(state.platform.as_ref(), &message)
                .await;
        }
        None => {
            debug!(update_id = update.update_id, "Skipping update without text message");
        }
    }

    Ok(Json(StatusResponse::new("ok")))
}

/// GET /webhook/info - Current webhook registration.
pub async fn webhook_info(State(state): State<AppState>) -> Result<Json<WebhookInfoResponse>> {
    let status = state.platform.webhook_info().await.map_err(|e| {
        error!(error = %e, "Error getting webhook info");
        ApiError::Internal("Internal server error".to_string())
    })?;
    Ok(Json(status.into()))
}

/// POST /webhook/set - Register the configured webhook URL.
pub async fn set_webhook(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    register_webhook(&state).await.map_err(|e| {
        error!(error = %e, "Error setting webhook");
        ApiError::Internal("Failed to set webhook".to_string())
    })?;
    Ok(Json(StatusResponse::new("webhook set successfully")))
}

/// POST /webhook/delete - Clear the webhook registration (switch to polling).
pub async fn delete_webhook(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    state.platform.delete_webhook().await.map_err(|e| {
        error!(error = %e, "Error deleting webhook");
        ApiError::Internal("Failed to delete webhook".to_string())
    })?;
    info!("Webhook deleted");
    Ok(Json(StatusResponse::new("webhook deleted successfully")))
}

/// Registers the configured webhook URL with the platform.
///
/// Returns `Ok(false)` without calling the platform when no URL is
/// configured.
pub async fn register_webhook(state: &AppState) -> parrot_core::PlatformResult<bool> {
    let Some(url) = state.config.webhook_url.as_deref() else {
        warn!("WEBHOOK_HOST not configured, webhook not registered");
        return Ok(false);
    };

    state.platform.set_webhook(url).await?;
    info!(url = %url, "Webhook set");
    Ok(true)
}
