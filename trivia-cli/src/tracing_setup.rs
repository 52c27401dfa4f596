//! Tracing setup for the trivia CLI
//!
//! Usage:
//!   trivia --debug serve              # Debug logging to console
//!   RUST_LOG=trivia_server=debug trivia serve
//!
//! `RUST_LOG` wins over both `--debug` and the configured `log.level`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;
use trivia_core::LogFormat;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Force debug level unless RUST_LOG is set
    pub debug: bool,
    /// Level from the config file
    pub level: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl TracingConfig {
    fn filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        let fallback = if self.debug { "debug" } else { self.level.as_str() };
        EnvFilter::try_new(fallback)
            .map_err(|err| anyhow!("invalid log level '{}': {}", fallback, err))
    }
}

/// Initialize the global subscriber
pub fn init(config: &TracingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_target(config.debug);

    match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_level_is_reported() {
        std::env::remove_var("RUST_LOG");
        let config = TracingConfig {
            level: "trivia=loud".to_string(),
            ..Default::default()
        };
        let err = config.filter().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn debug_flag_overrides_level() {
        std::env::remove_var("RUST_LOG");
        let config = TracingConfig {
            debug: true,
            level: "trivia=loud".to_string(),
            ..Default::default()
        };
        assert!(config.filter().is_ok());
    }
}
