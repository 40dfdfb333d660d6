//! Default value functions for configuration.

pub fn default_port() -> u16 {
    6667
}

/// Seconds without inbound data before a read reports `TimedOut`.
pub fn default_read_timeout_secs() -> u64 {
    300
}

pub fn default_trigger_marker() -> char {
    '!'
}
