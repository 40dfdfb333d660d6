//! Configuration loading and management.
//!
//! - [`types`]: config struct definitions and TOML loading
//! - [`validation`]: start-up checks, all errors collected at once
//! - [`defaults`]: serde default values

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, IdentityConfig, LogConfig, ServerConfig};
pub use validation::{ValidationError, validate};
