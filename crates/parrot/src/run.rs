//! Mode runners for the binary.

use std::sync::Arc;
use std::time::Duration;

use parrot_api::{serve, ApiConfig, AppState};
use parrot_core::Dispatcher;
use parrot_telegram::{
    shutdown_channel, shutdown_signal, BotConfig, PollConfig, Poller, TelegramClient,
};
use tracing::info;

use crate::cli::{Cli, Commands};

/// Error type returned by the runners.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Loads configuration, connects to Telegram and runs the selected mode.
pub async fn run(cli: Cli) -> Result<(), BoxError> {
    let command = cli.command();
    let config = apply_overrides(BotConfig::from_env()?, &command);
    info!(config = ?config, "Configuration loaded");

    let client = Arc::new(TelegramClient::new(config.token.clone()));
    let username = client.get_me().await?;
    info!(username = %username, "Bot initialized successfully");

    let dispatcher = Dispatcher::standard(Some(username));

    match command {
        Commands::Serve { .. } => {
            let state = AppState::new(ApiConfig::from(&config), client, dispatcher);
            serve(state, shutdown_signal()).await?;
        }
        Commands::Poll { timeout } => {
            let poll_config = PollConfig::new().with_timeout(Duration::from_secs(timeout));
            let mut poller = Poller::new(client, Arc::new(dispatcher), shutdown_channel())
                .with_config(poll_config);
            poller.run().await?;
            info!("Bot stopped by user");
        }
    }

    Ok(())
}

/// Applies command-line overrides to the environment configuration.
pub fn apply_overrides(mut config: BotConfig, command: &Commands) -> BotConfig {
    if let Commands::Serve { host, port } = command {
        if let Some(host) = host {
            config.server_host = host.clone();
        }
        if let Some(port) = port {
            config.server_port = *port;
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> BotConfig {
        BotConfig::from_lookup(|key| (key == "BOT_TOKEN").then(|| "123:abc".to_string()))
            .unwrap()
    }

    #[test]
    fn test_overrides_applied_for_serve() {
        let command = Commands::Serve {
            host: Some("127.0.0.1".into()),
            port: Some(9443),
        };
        let config = apply_overrides(base_config(), &command);
        assert_eq!(config.bind_address(), "127.0.0.1:9443");
    }

    #[test]
    fn test_no_overrides_keeps_env_values() {
        let config = apply_overrides(base_config(), &Commands::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");

        let config = apply_overrides(base_config(), &Commands::Poll { timeout: 10 });
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
