//! Read/write boundary of the session.
//!
//! Reads carry an optional deadline. Expiry is reported as
//! [`ReadOutcome::TimedOut`], an orderly close by the peer as
//! [`ReadOutcome::Closed`]; only a real I/O failure is an error.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use slircbot_proto::{LineCodec, ProtocolError};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tokio_util::codec::Framed;

/// Result of waiting for the next inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete line, terminator removed.
    Line(String),
    /// Nothing arrived before the read deadline.
    TimedOut,
    /// The peer closed the connection.
    Closed,
}

/// Line-framed connection to the server.
pub struct Connection<S> {
    framed: Framed<S, LineCodec>,
    read_timeout: Option<Duration>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Frame `stream` into lines; `None` waits for data forever.
    pub fn new(stream: S, read_timeout: Option<Duration>) -> Self {
        Self {
            framed: Framed::new(stream, LineCodec::new()),
            read_timeout,
        }
    }

    /// Wait for the next complete line.
    pub async fn read_line(&mut self) -> Result<ReadOutcome, ProtocolError> {
        let next = match self.read_timeout {
            Some(limit) => match timeout(limit, self.framed.next()).await {
                Ok(next) => next,
                Err(_) => return Ok(ReadOutcome::TimedOut),
            },
            None => self.framed.next().await,
        };

        match next {
            Some(Ok(line)) => Ok(ReadOutcome::Line(line)),
            Some(Err(e)) => Err(e),
            None => Ok(ReadOutcome::Closed),
        }
    }

    /// Write already-terminated wire text and flush it.
    pub async fn send(&mut self, wire: impl Into<String>) -> Result<(), ProtocolError> {
        self.framed.send(wire.into()).await
    }

    /// Shut down the write side. The peer sees end of stream.
    pub async fn close(&mut self) -> Result<(), ProtocolError> {
        self.framed.get_mut().shutdown().await?;
        Ok(())
    }
}
