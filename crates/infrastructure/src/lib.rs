//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and loads the process
//! configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, LocaleConfig, LoggingConfig, UsersConfig};
pub use telemetry::{LoggingError, filter_directive, init_logging};
