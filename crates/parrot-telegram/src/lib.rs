//! Telegram transport for Parrot.
//!
//! This crate connects the transport-agnostic pieces of `parrot-core` to the
//! Telegram Bot API:
//!
//! - [`TelegramClient`]: teloxide-backed [`Platform`](parrot_core::Platform)
//! - [`BotConfig`]: environment configuration shared by both front-ends
//! - [`Poller`]: the long-polling front-end
//! - [`convert`]: teloxide update to core type conversion
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use parrot_core::Dispatcher;
//! use parrot_telegram::{shutdown_channel, BotConfig, Poller, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_env()?;
//!     let client = Arc::new(TelegramClient::new(config.token.clone()));
//!     let dispatcher = Arc::new(Dispatcher::standard(None));
//!
//!     let mut poller = Poller::new(client, dispatcher, shutdown_channel());
//!     poller.run().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod polling;
pub mod signal;

pub use client::TelegramClient;
pub use config::BotConfig;
pub use error::{Result, TelegramError};
pub use polling::{PollConfig, PollStats, Poller};
pub use signal::{shutdown_channel, shutdown_signal};
