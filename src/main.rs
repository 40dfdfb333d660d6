//! slircbot - Straylight IRC Bot
//!
//! Connects to one server, joins the configured channels and answers
//! trigger commands until it is no longer in any channel.

use std::process::ExitCode;

use slircbot::{AuditLog, BotError, Config, Dispatcher};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "slircbot.toml".to_string());

    match run(&config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, code = e.error_code(), "slircbot terminated");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config_path: &str) -> Result<(), BotError> {
    let config = Config::load(config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server.address(),
        nick = %config.identity.nick,
        channels = config.channels.len(),
        triggers = config.triggers.len(),
        "Starting slircbot"
    );

    let audit = AuditLog::new(&config.log.dir);
    let dispatcher = Dispatcher::from_config(&config);

    let session = slircbot::connect(config, dispatcher, audit).await?;
    session.run().await
}
