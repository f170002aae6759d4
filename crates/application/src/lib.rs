//! Application layer - Use cases and orchestration
//!
//! Resolves the reply locale, calls the transit API through a port,
//! normalizes the response and renders the localized reply. Adapters in the
//! infrastructure layer implement the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
