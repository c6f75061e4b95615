//! Error types for the Telegram transport.

use parrot_core::PlatformError;
use thiserror::Error;

/// Errors that can occur while configuring or running the bot.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set BOT_TOKEN environment variable.")]
    NoToken,

    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A call to the Telegram Bot API failed.
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;
