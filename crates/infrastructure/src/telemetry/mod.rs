//! Logging initialisation

mod logging;

pub use logging::{LoggingError, filter_directive, init_logging};
