//! tracing-subscriber setup
//!
//! Logs go to stderr so stdout stays free for relay messages.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Logging setup failures
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive does not parse
    #[error("Invalid log filter {directive:?}: {reason}")]
    InvalidFilter {
        /// The rejected directive
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Failed to initialise logging: {0}")]
    Init(String),
}

/// Filter directive for a verbosity count
///
/// Without `-v` flags the configured level applies; each flag raises the
/// level one step.
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => config.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over both the configuration and `verbose`.
///
/// # Errors
///
/// Returns an error if the directive is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<(), LoggingError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(config, verbose);
            EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter {
                directive,
                reason: e.to_string(),
            })?
        },
    };

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
    });
    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            json: false,
        }
    }

    #[test]
    fn configured_level_without_flags() {
        assert_eq!(filter_directive(&config("warn"), 0), "warn");
        assert_eq!(
            filter_directive(&config("madtrans=debug,reqwest=warn"), 0),
            "madtrans=debug,reqwest=warn"
        );
    }

    #[test]
    fn flags_raise_the_level() {
        assert_eq!(filter_directive(&config("warn"), 1), "info");
        assert_eq!(filter_directive(&config("warn"), 2), "debug");
        assert_eq!(filter_directive(&config("warn"), 3), "trace");
        assert_eq!(filter_directive(&config("warn"), 9), "trace");
    }
}
