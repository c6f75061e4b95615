//! Teloxide-backed implementation of [`Platform`].

use std::time::Duration;

use async_trait::async_trait;
use parrot_core::{Platform, PlatformError, PlatformResult, Update, WebhookStatus};
use teloxide::prelude::*;
use teloxide::types::{ChatId, WebhookInfo};
use teloxide::RequestError;
use tracing::{debug, info};
use url::Url;

use crate::convert::convert_update;

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    /// Creates a client for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }

    /// Returns the bot's username.
    pub async fn get_me(&self) -> PlatformResult<String> {
        let me = self.bot.get_me().await.map_err(map_request_error)?;
        Ok(me.username().to_string())
    }
}

#[async_trait]
impl Platform for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str) -> PlatformResult<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(map_request_error)?;
        Ok(())
    }

    async fn get_updates(
        &self,
        offset: Option<i32>,
        timeout: Duration,
    ) -> PlatformResult<Vec<Update>> {
        let mut request = self.bot.get_updates().timeout(timeout.as_secs() as u32);
        if let Some(offset) = offset {
            request = request.offset(offset);
        }

        let updates = request.await.map_err(map_request_error)?;
        debug!(count = updates.len(), "Fetched updates");
        Ok(updates.iter().map(convert_update).collect())
    }

    async fn set_webhook(&self, url: &str) -> PlatformResult<()> {
        let url = Url::parse(url)
            .map_err(|e| PlatformError::Api(format!("invalid webhook URL '{}': {}", url, e)))?;
        self.bot
            .set_webhook(url.clone())
            .await
            .map_err(map_request_error)?;
        info!(url = %url, "Webhook registered");
        Ok(())
    }

    async fn delete_webhook(&self) -> PlatformResult<()> {
        self.bot
            .delete_webhook()
            .await
            .map_err(map_request_error)?;
        info!("Webhook deleted");
        Ok(())
    }

    async fn webhook_info(&self) -> PlatformResult<WebhookStatus> {
        let info = self
            .bot
            .get_webhook_info()
            .await
            .map_err(map_request_error)?;
        Ok(webhook_status(&info))
    }
}

/// Maps a teloxide request error onto the transport-agnostic error.
pub fn map_request_error(error: RequestError) -> PlatformError {
    match error {
        RequestError::RetryAfter(wait) => PlatformError::RetryAfter(wait.duration()),
        RequestError::Network(e) => PlatformError::Network(e.to_string()),
        RequestError::Io(e) => PlatformError::Network(e.to_string()),
        RequestError::InvalidJson { source, .. } => {
            PlatformError::InvalidResponse(source.to_string())
        }
        other => PlatformError::Api(other.to_string()),
    }
}

/// Converts teloxide's webhook info into a [`WebhookStatus`].
pub fn webhook_status(info: &WebhookInfo) -> WebhookStatus {
    WebhookStatus {
        url: info.url.as_ref().map(|u| u.to_string()).unwrap_or_default(),
        has_custom_certificate: info.has_custom_certificate,
        pending_update_count: info.pending_update_count,
        last_error_date: info.last_error_date.map(|d| d.timestamp()),
        last_error_message: info.last_error_message.clone(),
        max_connections: info.max_connections,
        allowed_updates: info.allowed_updates.as_ref().map(|updates| {
            updates
                .iter()
                .filter_map(|u| serde_json::to_value(u).ok())
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_status_conversion() {
        let info: WebhookInfo = serde_json::from_value(json!({
            "url": "https://bot.example.com/webhook",
            "has_custom_certificate": false,
            "pending_update_count": 3,
            "last_error_date": 1700000000,
            "last_error_message": "Connection refused",
            "max_connections": 40,
            "allowed_updates": ["message", "callback_query"]
        }))
        .unwrap();

        let status = webhook_status(&info);
        assert_eq!(status.url, "https://bot.example.com/webhook");
        assert!(!status.has_custom_certificate);
        assert_eq!(status.pending_update_count, 3);
        assert_eq!(status.last_error_date, Some(1700000000));
        assert_eq!(status.last_error_message.as_deref(), Some("Connection refused"));
        assert_eq!(status.max_connections, Some(40));
        assert_eq!(
            status.allowed_updates,
            Some(vec!["message".to_string(), "callback_query".to_string()])
        );
    }

    #[test]
    fn test_webhook_status_unset() {
        let info: WebhookInfo = serde_json::from_value(json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 0
        }))
        .unwrap();

        let status = webhook_status(&info);
        assert!(!status.is_registered());
        assert_eq!(status.last_error_date, None);
        assert_eq!(status.allowed_updates, None);
    }
}
