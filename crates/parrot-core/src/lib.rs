//! Core building blocks for the Parrot bot.
//!
//! This crate is transport-agnostic. It provides:
//!
//! - [`IncomingMessage`] and [`Update`], the only data the bot works with
//! - [`Dispatcher`], an ordered table of command routes with an explicit
//!   catch-all
//! - [`Platform`], the seam to the messaging platform used for replies,
//!   webhook management and update polling
//!
//! # Commands
//!
//! - `/start` - Greeting listing the available commands
//! - `/help` - Static help text
//! - `/echo <text>` - Echo the text back
//! - `/info` - Show the sender's user information
//!
//! Anything else is answered with `You said: <text>`.
//!
//! # Example
//!
//! ```
//! use parrot_core::{Dispatcher, IncomingMessage};
//!
//! let dispatcher = Dispatcher::standard(None);
//! let message = IncomingMessage::new(42, "Ada Lovelace", "/echo hello world", 42);
//!
//! assert_eq!(
//!     dispatcher.dispatch(&message).as_deref(),
//!     Some("Echo: hello world")
//! );
//! ```

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod platform;
pub mod replies;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use command::{command_argument, parse_command, CommandToken};
pub use dispatcher::{Dispatcher, DispatcherBuilder, Route};
pub use error::{PlatformError, PlatformResult};
pub use message::{IncomingMessage, Update};
pub use platform::{Platform, WebhookStatus};
