//! Webhook front-end for Parrot.
//!
//! This crate serves the HTTP side of the bot:
//! - `POST <webhook path>` receives platform updates and dispatches them
//! - `GET /` and `GET /health` report liveness
//! - `GET /webhook/info`, `POST /webhook/set` and `POST /webhook/delete`
//!   manage the platform's webhook registration
//!
//! # Example
//!
//! ```ignore
//! use parrot_api::{serve, ApiConfig, AppState};
//! use parrot_core::Dispatcher;
//! use parrot_telegram::{shutdown_signal, BotConfig, TelegramClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bot_config = BotConfig::from_env()?;
//!     let client = Arc::new(TelegramClient::new(bot_config.token.clone()));
//!     let state = AppState::new(ApiConfig::from(&bot_config), client, Dispatcher::standard(None));
//!
//!     serve(state, shutdown_signal()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
