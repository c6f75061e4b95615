//! Long-polling front-end.
//!
//! Used when the bot has no public HTTP endpoint. The poller clears any
//! webhook registration first, since the platform refuses `getUpdates`
//! while a webhook is set, then consumes update batches one at a time.

use std::sync::Arc;
use std::time::Duration;

use parrot_core::{Dispatcher, Platform};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Configuration for the poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Long-poll timeout passed to the platform.
    pub timeout: Duration,
    /// First wait after a failed fetch.
    pub min_backoff: Duration,
    /// Upper bound for the wait after repeated failures.
    pub max_backoff: Duration,
    /// Growth factor applied after each consecutive failure.
    pub backoff_factor: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            min_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(5),
            backoff_factor: 1.3,
        }
    }
}

impl PollConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the long-poll timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the backoff bounds.
    pub fn with_backoff(mut self, min: Duration, max: Duration) -> Self {
        self.min_backoff = min;
        self.max_backoff = max;
        self
    }
}

/// Exponential backoff between failed fetches.
#[derive(Debug, Clone)]
struct Backoff {
    current: Duration,
    min: Duration,
    max: Duration,
    factor: f64,
}

impl Backoff {
    fn new(config: &PollConfig) -> Self {
        Self {
            current: config.min_backoff,
            min: config.min_backoff,
            max: config.max_backoff,
            factor: config.backoff_factor,
        }
    }

    /// Returns the wait for this failure and grows the next one.
    fn next(&mut self) -> Duration {
        let wait = self.current;
        self.current = self.current.mul_f64(self.factor).min(self.max);
        wait
    }

    fn reset(&mut self) {
        self.current = self.min;
    }
}

/// Counters reported when the poll loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    /// Updates received, including skipped ones.
    pub updates: u64,
    /// Replies delivered.
    pub replies: u64,
    /// Replies that failed to send.
    pub failed_sends: u64,
}

/// Pulls updates from the platform and hands them to the dispatcher.
pub struct Poller {
    platform: Arc<dyn Platform>,
    dispatcher: Arc<Dispatcher>,
    config: PollConfig,
    shutdown: watch::Receiver<bool>,
}

impl Poller {
    /// Creates a poller with default configuration.
    ///
    /// The loop stops once `shutdown` becomes `true` or its sender is dropped.
    pub fn new(
        platform: Arc<dyn Platform>,
        dispatcher: Arc<Dispatcher>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            platform,
            dispatcher,
            config: PollConfig::default(),
            shutdown,
        }
    }

    /// Replaces the poll configuration.
    pub fn with_config(mut self, config: PollConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the poll loop until shutdown.
    ///
    /// Fails only if the webhook registration cannot be cleared.
    pub async fn run(&mut self) -> Result<PollStats> {
        info!("Clearing webhook before polling");
        self.platform.delete_webhook().await?;

        info!(
            timeout_secs = self.config.timeout.as_secs(),
            "Starting bot in polling mode"
        );

        let mut offset: Option<i32> = None;
        let mut backoff = Backoff::new(&self.config);
        let mut stats = PollStats::default();

        loop {
            let fetched = tokio::select! {
                biased;
                _ = wait_for_shutdown(&mut self.shutdown) => break,
                result = self.platform.get_updates(offset, self.config.timeout) => result,
            };

            let updates = match fetched {
                Ok(updates) => {
                    backoff.reset();
                    updates
                }
                Err(e) => {
                    let wait = e.retry_after().unwrap_or_else(|| backoff.next());
                    warn!(
                        error = %e,
                        wait_ms = wait.as_millis() as u64,
                        "Failed to fetch updates"
                    );
                    tokio::select! {
                        biased;
                        _ = wait_for_shutdown(&mut self.shutdown) => break,
                        _ = tokio::time::sleep(wait) => continue,
                    }
                }
            };

            for update in updates {
                match update.next_offset() {
                    Some(next) => offset = Some(next),
                    None => warn!(update_id = update.update_id, "Update id out of offset range"),
                }
                stats.updates += 1;

                let Some(message) = update.message else {
                    debug!(update_id = update.update_id, "Skipping update without text message");
                    continue;
                };

                match self.dispatcher.handle(self.platform.as_ref(), &message).await {
                    Ok(Some(_)) => stats.replies += 1,
                    Ok(None) => {}
                    Err(_) => stats.failed_sends += 1,
                }
            }
        }

        info!(
            updates = stats.updates,
            replies = stats.replies,
            failed_sends = stats.failed_sends,
            "Polling stopped"
        );
        Ok(stats)
    }
}

/// Resolves once shutdown is requested or the sender is gone.
async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}
