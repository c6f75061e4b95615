//! In-memory [`Platform`] for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{PlatformError, PlatformResult};
use crate::message::Update;
use crate::platform::{Platform, WebhookStatus};

/// Records outbound calls and serves scripted update batches.
///
/// Once the scripted batches run out, `get_updates` behaves like an idle
/// long poll: it sleeps for the requested timeout and returns nothing.
#[derive(Default)]
pub struct MockPlatform {
    sent: Mutex<Vec<(i64, String)>>,
    batches: Mutex<VecDeque<PlatformResult<Vec<Update>>>>,
    offsets: Mutex<Vec<Option<i32>>>,
    webhook: Mutex<Option<String>>,
    delete_calls: AtomicUsize,
    fail_sends: AtomicBool,
    fail_webhook: AtomicBool,
}

impl MockPlatform {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a batch returned by the next `get_updates` call.
    pub async fn push_batch(&self, batch: Vec<Update>) {
        self.batches.lock().await.push_back(Ok(batch));
    }

    /// Queues an error returned by the next `get_updates` call.
    pub async fn push_error(&self, error: PlatformError) {
        self.batches.lock().await.push_back(Err(error));
    }

    /// Makes every `send_text` call fail.
    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    /// Makes every webhook call fail.
    pub fn fail_webhook(&self) {
        self.fail_webhook.store(true, Ordering::SeqCst);
    }

    /// Pre-registers a webhook URL.
    pub async fn set_registered_webhook(&self, url: impl Into<String>) {
        *self.webhook.lock().await = Some(url.into());
    }

    /// Messages sent so far, as `(chat_id, text)`.
    pub async fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().await.clone()
    }

    /// Offsets passed to `get_updates`, in call order.
    pub async fn offsets(&self) -> Vec<Option<i32>> {
        self.offsets.lock().await.clone()
    }

    /// Currently registered webhook URL.
    pub async fn registered_webhook(&self) -> Option<String> {
        self.webhook.lock().await.clone()
    }

    /// Number of `delete_webhook` calls.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check_webhook(&self) -> PlatformResult<()> {
        if self.fail_webhook.load(Ordering::SeqCst) {
            return Err(PlatformError::Api("Unauthorized".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn send_text(&self, chat_id: i64, text: &str) -> PlatformResult<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(PlatformError::Network("connection reset".into()));
        }
        self.sent.lock().await.push((chat_id, text.to_string()));
        Ok(())
    }

    async fn get_updates(
        &self,
        offset: Option<i32>,
        timeout: Duration,
    ) -> PlatformResult<Vec<Update>> {
        self.offsets.lock().await.push(offset);

        let next = self.batches.lock().await.pop_front();
        match next {
            Some(batch) => batch,
            None => {
                tokio::time::sleep(timeout).await;
                Ok(Vec::new())
            }
        }
    }

    async fn set_webhook(&self, url: &str) -> PlatformResult<()> {
        self.check_webhook()?;
        *self.webhook.lock().await = Some(url.to_string());
        Ok(())
    }

    async fn delete_webhook(&self) -> PlatformResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_webhook()?;
        *self.webhook.lock().await = None;
        Ok(())
    }

    async fn webhook_info(&self) -> PlatformResult<WebhookStatus> {
        self.check_webhook()?;
        let url = self.webhook.lock().await.clone().unwrap_or_default();
        Ok(WebhookStatus {
            url,
            max_connections: Some(40),
            ..WebhookStatus::default()
        })
    }
}
