//! Fatal error handling for slircbot.
//!
//! Everything here ends the process. Recoverable conditions (audit log
//! failures, handler resolution failures, malformed lines) are handled
//! where they occur and never reach this type.

use slircbot_proto::ProtocolError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that terminate the bot.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("configuration error: {0}")]
    ConfigInvalid(#[from] ConfigError),

    #[error("could not connect to {address}: {source}")]
    TransportUnavailable {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("transport failure: {0}")]
    TransportIo(#[from] ProtocolError),

    #[error("connection closed by {0}")]
    TransportClosed(String),
}

impl BotError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigInvalid(_) => "config_invalid",
            Self::TransportUnavailable { .. } => "transport_unavailable",
            Self::TransportIo(_) => "transport_io",
            Self::TransportClosed(_) => "transport_closed",
        }
    }

    /// Process exit status, distinct per failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigInvalid(_) => 2,
            Self::TransportUnavailable { .. } => 3,
            Self::TransportIo(_) => 4,
            Self::TransportClosed(_) => 5,
        }
    }
}

impl From<std::io::Error> for BotError {
    fn from(e: std::io::Error) -> Self {
        Self::TransportIo(ProtocolError::Io(e))
    }
}
