//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};

/// Parrot - a command echo bot for Telegram
#[derive(Parser, Debug)]
#[command(name = "parrot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve the webhook endpoint (default)
    Serve {
        /// Address to bind (overrides WEB_SERVER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides WEB_SERVER_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Poll Telegram for updates instead of receiving a webhook
    Poll {
        /// Long-poll timeout in seconds
        #[arg(short, long, default_value = "30")]
        timeout: u64,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
        }
    }
}

impl Cli {
    /// Log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "parrot=info,parrot_core=info,parrot_telegram=info,parrot_api=info,teloxide=warn",
            1 => "parrot=debug,parrot_core=debug,parrot_telegram=debug,parrot_api=debug,teloxide=info,tower_http=debug",
            2 => "parrot=trace,parrot_core=trace,parrot_telegram=trace,parrot_api=trace,teloxide=debug,tower_http=trace",
            _ => "trace",
        }
    }

    /// The selected mode, defaulting to `serve`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serve() {
        let cli = Cli::parse_from(["parrot"]);
        assert_eq!(cli.command(), Commands::default());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["parrot", "serve", "--host", "127.0.0.1", "-p", "9000"]);
        assert_eq!(
            cli.command(),
            Commands::Serve {
                host: Some("127.0.0.1".to_string()),
                port: Some(9000),
            }
        );
    }

    #[test]
    fn test_poll_timeout() {
        let cli = Cli::parse_from(["parrot", "poll"]);
        assert_eq!(cli.command(), Commands::Poll { timeout: 30 });

        let cli = Cli::parse_from(["parrot", "-v", "poll", "-t", "5"]);
        assert_eq!(cli.command(), Commands::Poll { timeout: 5 });
        assert!(cli.log_filter().contains("parrot=debug"));
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["parrot", "-vvv"]);
        assert_eq!(cli.log_filter(), "trace");
    }
}
