//! Application state shared across handlers.

use std::sync::Arc;

use parrot_core::{Dispatcher, Platform};

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// Everything is read-only after startup, so requests never contend.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ApiConfig>,
    /// Messaging platform client.
    pub platform: Arc<dyn Platform>,
    /// Command dispatcher.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(config: ApiConfig, platform: Arc<dyn Platform>, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            platform,
            dispatcher: Arc::new(dispatcher),
        }
    }
}
