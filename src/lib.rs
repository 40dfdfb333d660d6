//! slircbot - Straylight IRC Bot
//!
//! A single-connection IRC client that answers trigger commands
//! (`!help`, `!echo ...`) and stays online while it is in at least one
//! channel.

pub mod audit;
pub mod config;
pub mod error;
pub mod session;
pub mod triggers;

pub use audit::AuditLog;
pub use config::Config;
pub use error::BotError;
pub use session::{Session, connect};
pub use triggers::{Dispatcher, Registry};
