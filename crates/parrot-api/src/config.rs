//! Server configuration.

use parrot_telegram::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_WEBHOOK_PATH};
use parrot_telegram::BotConfig;

/// Webhook server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Path the platform posts updates to.
    pub webhook_path: String,
    /// Public URL registered with the platform, if configured.
    pub webhook_url: Option<String>,
}

impl ApiConfig {
    /// Creates a new configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the webhook path and public URL.
    pub fn with_webhook(mut self, path: impl Into<String>, url: Option<String>) -> Self {
        self.webhook_path = path.into();
        self.webhook_url = url;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns true if a public webhook URL is configured.
    pub fn webhook_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
            webhook_url: None,
        }
    }
}

impl From<&BotConfig> for ApiConfig {
    fn from(config: &BotConfig) -> Self {
        Self {
            host: config.server_host.clone(),
            port: config.server_port,
            webhook_path: config.webhook_path.clone(),
            webhook_url: config.webhook_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.webhook_path, "/webhook");
        assert!(!config.webhook_configured());
    }

    #[test]
    fn test_api_config_bind_address() {
        let config = ApiConfig::new("127.0.0.1", 3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_api_config_from_bot_config() {
        let bot = BotConfig {
            token: "123:abc".into(),
            webhook_host: Some("https://bot.example.com".into()),
            webhook_path: "/hook".into(),
            server_host: "127.0.0.1".into(),
            server_port: 9000,
        };

        let config = ApiConfig::from(&bot);
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.webhook_path, "/hook");
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://bot.example.com/hook")
        );
    }
}
