//! The session loop.
//!
//! One connection, one synchronous read → parse → react → compose → send
//! cycle. Phases:
//!
//! ```text
//! Connecting → Authenticating → JoiningChannels → Active → Draining → Closed
//! ```
//!
//! The loop leaves `Active` when the joined-channel set becomes empty,
//! either by being kicked from the last channel or by a ping timeout
//! notice. A peer hang-up skips `Draining` and is reported as an error.

mod react;
mod state;
mod transport;

pub use react::{PING_TIMEOUT_REASON, react};
pub use state::SessionState;
pub use transport::{Connection, ReadOutcome};

use std::fmt;

use slircbot_proto::command::{join_line, nick_line, quit_line, user_line};
use slircbot_proto::{ParsedCommand, compose};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::BotError;
use crate::triggers::Dispatcher;

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Opening the TCP connection.
    Connecting,
    /// Sending `NICK` and `USER`.
    Authenticating,
    /// Sending `JOIN` for every configured channel.
    JoiningChannels,
    /// Reading and answering until no channel is left.
    Active,
    /// Sending `QUIT` and closing the connection.
    Draining,
    /// Done.
    Closed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Connecting => "connecting",
            Phase::Authenticating => "authenticating",
            Phase::JoiningChannels => "joining_channels",
            Phase::Active => "active",
            Phase::Draining => "draining",
            Phase::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Open the TCP connection and build a session on it.
pub async fn connect(
    config: Config,
    dispatcher: Dispatcher,
    audit: AuditLog,
) -> Result<Session<TcpStream>, BotError> {
    let address = config.server.address();
    debug!(phase = %Phase::Connecting, server = %address, "opening connection");

    audit
        .record(&format!(
            "Started on {address}, with nick: {}",
            config.identity.nick
        ))
        .await;

    match TcpStream::connect(&address).await {
        Ok(stream) => {
            info!(server = %address, "Connected to {address}");
            audit.record(&format!("Connected to {address}")).await;
            Ok(Session::new(stream, config, dispatcher, audit))
        }
        Err(source) => {
            audit.record(&format!("Could not connect to {address}")).await;
            Err(BotError::TransportUnavailable { address, source })
        }
    }
}

/// A connected session.
pub struct Session<S> {
    config: Config,
    dispatcher: Dispatcher,
    audit: AuditLog,
    state: SessionState,
    phase: Phase,
    connection: Connection<S>,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Build a session over an already connected stream.
    pub fn new(stream: S, config: Config, dispatcher: Dispatcher, audit: AuditLog) -> Self {
        let connection = Connection::new(stream, config.server.read_timeout());
        let state = SessionState::new(config.channels.iter().cloned());
        Self {
            config,
            dispatcher,
            audit,
            state,
            phase: Phase::Connecting,
            connection,
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = %self.phase, to = %phase, "session phase change");
        self.phase = phase;
    }

    /// Register, join, and serve until no channel is left.
    pub async fn run(mut self) -> Result<(), BotError> {
        self.register().await?;
        self.join_channels().await?;

        self.enter(Phase::Active);
        while !self.state.is_empty() {
            match self.connection.read_line().await? {
                ReadOutcome::Line(line) => self.process_line(&line).await?,
                ReadOutcome::TimedOut => {
                    debug!("no data before read deadline");
                }
                ReadOutcome::Closed => return self.closed_by_peer().await,
            }
        }

        self.drain().await
    }

    async fn register(&mut self) -> Result<(), BotError> {
        self.enter(Phase::Authenticating);
        let identity = &self.config.identity;
        let (nick, user) = (
            nick_line(&identity.nick),
            user_line(&identity.nick, &identity.real_name),
        );
        self.connection.send(nick).await?;
        self.connection.send(user).await?;
        Ok(())
    }

    async fn join_channels(&mut self) -> Result<(), BotError> {
        self.enter(Phase::JoiningChannels);
        self.connection.send(join_line(self.state.channels())).await?;

        let joined = self.state.channels().join(",");
        info!(channels = %joined, "Joined: {joined}");
        self.audit.record(&format!("Joined: {joined}")).await;
        Ok(())
    }

    /// Handle one inbound line: react, answer if needed, and log it.
    async fn process_line(&mut self, line: &str) -> Result<(), BotError> {
        let cmd = ParsedCommand::parse(line);
        let reply = react(
            &cmd,
            &self.config.identity.nick,
            &mut self.state,
            &self.dispatcher,
        );

        if let Some(reply) = reply {
            match compose(&reply, &cmd) {
                Ok(Some(wire)) => {
                    self.connection.send(wire.as_str()).await?;
                    self.audit.record(&wire).await;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, action = %cmd.action, sender = ?cmd.sender_nick(), "dropping reply");
                }
            }
        }

        self.audit.record(line).await;

        if self.state.is_empty() {
            info!("no channels left");
        }
        Ok(())
    }

    async fn drain(mut self) -> Result<(), BotError> {
        self.enter(Phase::Draining);
        let quit = quit_line();
        self.connection.send(quit.as_str()).await?;
        self.audit.record(&quit).await;

        if let Err(e) = self.connection.close().await {
            warn!(error = %e, "error while closing connection");
        }
        self.enter(Phase::Closed);

        let address = self.config.server.address();
        info!(server = %address, "Disconnected from {address}");
        self.audit.record(&format!("Disconnected from {address}")).await;
        Ok(())
    }

    async fn closed_by_peer(mut self) -> Result<(), BotError> {
        self.state.clear();
        self.enter(Phase::Closed);

        let address = self.config.server.address();
        warn!(server = %address, "connection closed by server");
        self.audit.record(&format!("Disconnected from {address}")).await;
        Err(BotError::TransportClosed(address))
    }
}
