//! Integration test common infrastructure.
//!
//! Provides a scripted IRC server the bot connects to, and helpers to
//! build bot configurations pointing at it.

pub mod server;

#[allow(unused_imports)]
pub use server::MockServer;

use slircbot::Config;
use std::path::Path;

/// Build a validated config for a bot connecting to `port` on localhost.
#[allow(dead_code)]
pub fn test_config(port: u16, channels: &[&str], log_dir: &Path) -> Config {
    let channels: Vec<String> = channels.iter().map(|c| format!("\"{c}\"")).collect();
    let toml = format!(
        r#"
channels = [{channels}]
triggers = ["help", "echo", "version", "weather"]

[server]
host = "127.0.0.1"
port = {port}
read_timeout_secs = 5

[identity]
nick = "slircbot"
real_name = "Straylight Bot"
owner = "case"

[log]
dir = "{dir}"
"#,
        channels = channels.join(", "),
        dir = log_dir.display(),
    );
    Config::parse(&toml).expect("test config must be valid")
}
