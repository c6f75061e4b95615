//! Response DTOs for the API.

use parrot_core::WebhookStatus;
use serde::Serialize;

/// Generic `{"status": ...}` response.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Status string.
    pub status: String,
}

impl StatusResponse {
    /// Creates a status response.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Root endpoint response.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    /// Human-readable banner.
    pub message: String,
    /// Service status.
    pub status: String,
    /// Whether a public webhook URL is configured.
    pub webhook_configured: bool,
}

/// Webhook registration details.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookInfoResponse {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: u32,
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<String>>,
}

impl From<WebhookStatus> for WebhookInfoResponse {
    fn from(status: WebhookStatus) -> Self {
        Self {
            url: status.url,
            has_custom_certificate: status.has_custom_certificate,
            pending_update_count: status.pending_update_count,
            last_error_date: status.last_error_date,
            last_error_message: status.last_error_message,
            max_connections: status.max_connections,
            allowed_updates: status.allowed_updates,
        }
    }
}
