//! Logging setup for the CLI
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Filter precedence: `EXTFILE_LOG`, then the verbose flag,
//! then the configured level.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

pub const LOG_ENV_VAR: &str = "EXTFILE_LOG";

/// Build the filter for the subscriber
pub fn build_env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return filter;
    }

    if verbose {
        return EnvFilter::new("debug");
    }

    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr subscriber; a second call is a no-op
pub fn init(config: &LoggingConfig, verbose: bool) {
    let _ = fmt()
        .with_env_filter(build_env_filter(config, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
