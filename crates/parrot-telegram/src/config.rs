//! Bot configuration sourced from the environment.
//!
//! # Environment Variables
//!
//! Required:
//! - `BOT_TOKEN`: Bot token from @BotFather
//!
//! Optional:
//! - `WEBHOOK_HOST`: Public base URL, e.g. `https://bot.example.com`
//! - `WEBHOOK_PATH`: Path of the webhook endpoint (default: `/webhook`)
//! - `WEB_SERVER_HOST`: Address to bind (default: `0.0.0.0`)
//! - `WEB_SERVER_PORT`: Port to bind (default: `8000`)

use std::fmt;

use crate::error::{Result, TelegramError};

/// Environment variable holding the bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Environment variable holding the public base URL.
pub const WEBHOOK_HOST_ENV: &str = "WEBHOOK_HOST";

/// Environment variable holding the webhook path.
pub const WEBHOOK_PATH_ENV: &str = "WEBHOOK_PATH";

/// Environment variable holding the bind host.
pub const SERVER_HOST_ENV: &str = "WEB_SERVER_HOST";

/// Environment variable holding the bind port.
pub const SERVER_PORT_ENV: &str = "WEB_SERVER_PORT";

/// Default webhook path.
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

/// Default bind host.
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Paths served by the auxiliary endpoints; the webhook cannot use them.
pub const RESERVED_PATHS: &[&str] = &[
    "/",
    "/health",
    "/webhook/info",
    "/webhook/set",
    "/webhook/delete",
];

/// Bot configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Telegram bot token.
    pub token: String,
    /// Public base URL the platform posts to.
    pub webhook_host: Option<String>,
    /// Path of the webhook endpoint.
    pub webhook_path: String,
    /// Host to bind the HTTP server to.
    pub server_host: String,
    /// Port to bind the HTTP server to.
    pub server_port: u16,
}

impl BotConfig {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get(BOT_TOKEN_ENV).ok_or(TelegramError::NoToken)?;

        let webhook_host = get(WEBHOOK_HOST_ENV).map(|h| h.trim_end_matches('/').to_string());

        let webhook_path =
            get(WEBHOOK_PATH_ENV).unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());

        let server_host = get(SERVER_HOST_ENV).unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());

        let server_port = match get(SERVER_PORT_ENV) {
            Some(port) => port.trim().parse().map_err(|_| {
                TelegramError::InvalidConfig(format!("{} must be a port number, got '{}'", SERVER_PORT_ENV, port))
            })?,
            None => DEFAULT_SERVER_PORT,
        };

        let config = Self {
            token,
            webhook_host,
            webhook_path,
            server_host,
            server_port,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the webhook path can be routed.
    pub fn validate(&self) -> Result<()> {
        if !self.webhook_path.starts_with('/') {
            return Err(TelegramError::InvalidConfig(format!(
                "{} must start with '/', got '{}'",
                WEBHOOK_PATH_ENV, self.webhook_path
            )));
        }
        if RESERVED_PATHS.contains(&self.webhook_path.as_str()) {
            return Err(TelegramError::InvalidConfig(format!(
                "{} '{}' collides with a built-in endpoint",
                WEBHOOK_PATH_ENV, self.webhook_path
            )));
        }
        Ok(())
    }

    /// Full webhook URL, if a public host is configured.
    pub fn webhook_url(&self) -> Option<String> {
        self.webhook_host
            .as_ref()
            .map(|host| format!("{}{}", host, self.webhook_path))
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &mask_token(&self.token))
            .field("webhook_host", &self.webhook_host)
            .field("webhook_path", &self.webhook_path)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

/// Masks a bot token for logging, keeping only the bot id before `:`.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, _)) => format!("{}:***", bot_id),
        None => "***".to_string(),
    }
}
