//! Parrot bot binary.
//!
//! Start the webhook server with:
//! ```bash
//! BOT_TOKEN=xxx WEBHOOK_HOST=https://bot.example.com cargo run -p parrot
//! ```
//!
//! Or poll for updates when there is no public endpoint:
//! ```bash
//! BOT_TOKEN=xxx cargo run -p parrot -- poll
//! ```

use clap::Parser;
use parrot::cli::Cli;
use parrot::run::run;
use parrot_telegram::TelegramError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Local overrides first, then the usual .env
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli).await {
        if matches!(e.downcast_ref::<TelegramError>(), Some(TelegramError::NoToken)) {
            tracing::error!("BOT_TOKEN not configured. Please set it in .env file");
        } else {
            tracing::error!(error = %e, "Bot exited with error");
        }
        std::process::exit(1);
    }
}
