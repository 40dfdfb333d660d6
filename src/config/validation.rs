//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use slircbot_proto::ChannelExt;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.host is required")]
    MissingHost,
    #[error("server.port must be non-zero")]
    InvalidPort,
    #[error("identity.nick is required")]
    MissingNick,
    #[error("identity.nick must not contain whitespace, got '{0}'")]
    InvalidNick(String),
    #[error("identity.real_name is required")]
    MissingRealName,
    #[error("identity.owner is required")]
    MissingOwner,
    #[error("at least one channel is required")]
    NoChannels,
    #[error("invalid channel name '{0}'")]
    InvalidChannel(String),
    #[error("at least one trigger is required")]
    NoTriggers,
    #[error("invalid trigger name '{0}'")]
    InvalidTrigger(String),
    #[error("duplicate trigger '{0}'")]
    DuplicateTrigger(String),
    #[error("trigger_marker must be a visible, non-alphanumeric character, got {0:?}")]
    InvalidTriggerMarker(char),
    #[error("log.dir is required")]
    MissingLogDir,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }

    let identity = &config.identity;
    if identity.nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    } else if identity.nick.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidNick(identity.nick.clone()));
    }
    if identity.real_name.trim().is_empty() {
        errors.push(ValidationError::MissingRealName);
    }
    if identity.owner.trim().is_empty() {
        errors.push(ValidationError::MissingOwner);
    }

    if config.channels.is_empty() {
        errors.push(ValidationError::NoChannels);
    }
    for channel in &config.channels {
        if !channel.is_channel_name() {
            errors.push(ValidationError::InvalidChannel(channel.clone()));
        }
    }

    // Trigger order is the dispatch order, so duplicates are rejected
    // rather than silently collapsed.
    if config.triggers.is_empty() {
        errors.push(ValidationError::NoTriggers);
    }
    for (i, trigger) in config.triggers.iter().enumerate() {
        if trigger.is_empty() || trigger.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidTrigger(trigger.clone()));
        } else if config.triggers[..i].contains(trigger) {
            errors.push(ValidationError::DuplicateTrigger(trigger.clone()));
        }
    }

    let marker = config.trigger_marker;
    if marker.is_alphanumeric() || marker.is_whitespace() || marker.is_control() {
        errors.push(ValidationError::InvalidTriggerMarker(marker));
    }

    if config.log.dir.as_os_str().is_empty() {
        errors.push(ValidationError::MissingLogDir);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
