//! The seam to the messaging platform.
//!
//! Both front-ends and the dispatcher talk to the platform only through
//! [`Platform`], so the webhook server and the poll loop can be exercised
//! against an in-memory implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PlatformResult;
use crate::message::Update;

/// Snapshot of the platform's webhook registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookStatus {
    /// Registered webhook URL, empty when none is set.
    pub url: String,
    /// Whether a self-signed certificate was uploaded.
    pub has_custom_certificate: bool,
    /// Updates waiting to be delivered.
    pub pending_update_count: u32,
    /// Unix time of the most recent delivery error.
    pub last_error_date: Option<i64>,
    /// Description of the most recent delivery error.
    pub last_error_message: Option<String>,
    /// Maximum simultaneous connections the platform will open.
    pub max_connections: Option<u32>,
    /// Update types the webhook receives.
    pub allowed_updates: Option<Vec<String>>,
}

impl WebhookStatus {
    /// Returns true if a webhook URL is registered.
    pub fn is_registered(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Outbound calls to the messaging platform.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Sends a plain-text message to a conversation.
    async fn send_text(&self, chat_id: i64, text: &str) -> PlatformResult<()>;

    /// Long-polls for the next batch of updates.
    ///
    /// `offset` confirms every update below it. The call returns early as
    /// soon as updates arrive, or with an empty batch after `timeout`.
    async fn get_updates(&self, offset: Option<i32>, timeout: Duration)
        -> PlatformResult<Vec<Update>>;

    /// Registers `url` as the webhook receiving all updates.
    async fn set_webhook(&self, url: &str) -> PlatformResult<()>;

    /// Clears the webhook registration so updates can be polled.
    async fn delete_webhook(&self) -> PlatformResult<()>;

    /// Returns the current webhook registration.
    async fn webhook_info(&self) -> PlatformResult<WebhookStatus>;
}
