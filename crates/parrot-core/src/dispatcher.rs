//! Ordered command dispatch.
//!
//! The dispatcher holds an explicit list of [`Route`]s, each a predicate
//! paired with a handler. Routes are tried top to bottom and the first
//! match answers the message. When nothing matches, the catch-all handler
//! answers instead.

use std::fmt;

use tracing::{debug, error, info};

use crate::command::{command_argument, parse_command};
use crate::error::PlatformResult;
use crate::message::IncomingMessage;
use crate::platform::Platform;
use crate::replies;

type Predicate = Box<dyn Fn(&IncomingMessage) -> bool + Send + Sync>;
type Handler = Box<dyn Fn(&IncomingMessage) -> Option<String> + Send + Sync>;

/// Name reported for messages answered by the catch-all.
pub const FALLBACK_ROUTE: &str = "fallback";

/// A predicate and the handler that runs when it matches.
pub struct Route {
    name: String,
    predicate: Predicate,
    handler: Handler,
}

impl Route {
    /// Creates a route from an arbitrary predicate.
    ///
    /// The handler returns `None` to suppress the reply.
    pub fn new<P, H>(name: impl Into<String>, predicate: P, handler: H) -> Self
    where
        P: Fn(&IncomingMessage) -> bool + Send + Sync + 'static,
        H: Fn(&IncomingMessage) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            handler: Box::new(handler),
        }
    }

    /// Creates a route matching `/<command>` addressed to this bot.
    pub fn command<H>(command: &str, bot_username: Option<String>, handler: H) -> Self
    where
        H: Fn(&IncomingMessage) -> Option<String> + Send + Sync + 'static,
    {
        let name = command.to_string();
        let command = command.to_string();
        Self::new(
            name,
            move |msg: &IncomingMessage| {
                parse_command(&msg.text)
                    .map(|token| token.matches(&command, bot_username.as_deref()))
                    .unwrap_or(false)
            },
            handler,
        )
    }

    /// Route name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this route answers the message.
    pub fn matches(&self, message: &IncomingMessage) -> bool {
        (self.predicate)(message)
    }

    fn reply(&self, message: &IncomingMessage) -> Option<String> {
        (self.handler)(message)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("name", &self.name).finish()
    }
}

/// Maps an incoming message to at most one reply.
pub struct Dispatcher {
    routes: Vec<Route>,
    fallback: Handler,
}

impl Dispatcher {
    /// Starts building a dispatcher with no routes.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// The bot's command table: `/start`, `/help`, `/echo`, `/info`, then
    /// `You said: <text>` for everything else.
    ///
    /// `bot_username` restricts `/cmd@name` mentions to this bot.
    pub fn standard(bot_username: Option<String>) -> Self {
        Self::builder()
            .bot_username(bot_username)
            .command("start", |msg| Some(replies::start_text(msg)))
            .command("help", |_| Some(replies::HELP_TEXT.to_string()))
            .command("echo", |msg| {
                Some(match command_argument(&msg.text) {
                    Some(text) => replies::echo_text(text),
                    None => replies::ECHO_USAGE.to_string(),
                })
            })
            .command("info", |msg| Some(replies::info_text(msg)))
            .fallback(|msg| Some(replies::fallback_text(&msg.text)))
            .build()
    }

    /// Route names in evaluation order.
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(Route::name).collect()
    }

    /// Name of the route that answers `message`, or [`FALLBACK_ROUTE`].
    pub fn matched_route(&self, message: &IncomingMessage) -> &str {
        self.find(message)
            .map(Route::name)
            .unwrap_or(FALLBACK_ROUTE)
    }

    /// Computes the reply for a message without sending it.
    pub fn dispatch(&self, message: &IncomingMessage) -> Option<String> {
        match self.find(message) {
            Some(route) => route.reply(message),
            None => (self.fallback)(message),
        }
    }

    /// Computes the reply and sends it to the message's conversation.
    ///
    /// Returns the text that was sent, or `None` if the reply was
    /// suppressed. Send failures are logged and returned.
    pub async fn handle(
        &self,
        platform: &dyn Platform,
        message: &IncomingMessage,
    ) -> PlatformResult<Option<String>> {
        let route = self.matched_route(message);
        info!(
            chat_id = message.chat_id,
            user_id = message.user_id,
            route = %route,
            "Dispatching message"
        );

        let Some(reply) = self.dispatch(message) else {
            debug!(chat_id = message.chat_id, route = %route, "Reply suppressed");
            return Ok(None);
        };

        if let Err(e) = platform.send_text(message.chat_id, &reply).await {
            error!(chat_id = message.chat_id, error = %e, "Failed to send reply");
            return Err(e);
        }

        debug!(chat_id = message.chat_id, "Reply sent");
        Ok(Some(reply))
    }

    fn find(&self, message: &IncomingMessage) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(message))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routes", &self.route_names())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Dispatcher`].
#[derive(Default)]
pub struct DispatcherBuilder {
    routes: Vec<Route>,
    fallback: Option<Handler>,
    bot_username: Option<String>,
}

impl DispatcherBuilder {
    /// Sets the bot username used by routes added with [`command`](Self::command).
    pub fn bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    /// Appends a route.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends a route matching `/<command>`.
    pub fn command<H>(self, command: &str, handler: H) -> Self
    where
        H: Fn(&IncomingMessage) -> Option<String> + Send + Sync + 'static,
    {
        let route = Route::command(command, self.bot_username.clone(), handler);
        self.route(route)
    }

    /// Sets the catch-all handler. Without one, unmatched messages get no reply.
    pub fn fallback<H>(mut self, handler: H) -> Self
    where
        H: Fn(&IncomingMessage) -> Option<String> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Builds the dispatcher.
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            routes: self.routes,
            fallback: self.fallback.unwrap_or_else(|| Box::new(|_| None)),
        }
    }
}
