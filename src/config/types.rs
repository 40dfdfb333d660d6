//! Core configuration types and loading.

use serde::Deserialize;
use slircbot_proto::ChannelExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::defaults::{default_port, default_read_timeout_secs, default_trigger_marker};
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Channels to join, in order. Duplicates are collapsed on load.
    pub channels: Vec<String>,
    /// Trigger names in dispatch order. Must be unique.
    pub triggers: Vec<String>,
    /// Character a user message must start with to select a trigger.
    #[serde(default = "default_trigger_marker")]
    pub trigger_marker: char,
    /// Server to connect to.
    pub server: ServerConfig,
    /// Who the bot is.
    pub identity: IdentityConfig,
    /// Audit log location.
    pub log: LogConfig,
}

impl Config {
    /// Load, normalise and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse, normalise and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        config.normalize();
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Collapse duplicate channels, keeping the first occurrence.
    fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.channels.len());
        self.channels.retain(|channel| {
            if seen.iter().any(|s| s.same_channel(channel)) {
                false
            } else {
                seen.push(channel.clone());
                true
            }
        });
    }
}

/// Server connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host name or address (e.g., "irc.libera.chat").
    pub host: String,
    /// TCP port (default: 6667).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Read deadline in seconds (default: 300). 0 waits forever.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl ServerConfig {
    /// `host:port`, as used for connecting and in log lines.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_secs > 0).then(|| Duration::from_secs(self.read_timeout_secs))
    }
}

/// Bot identity.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub nick: String,
    pub real_name: String,
    /// Person running the bot.
    pub owner: String,
}

/// Audit log configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Directory holding one `<YYYY-MM-DD>.log` file per day.
    pub dir: PathBuf,
}
