//! EMT Madrid openbus integration for madtrans
//!
//! Provides access to the [EMT openbus](https://openbus.emtmadrid.es) proxy
//! server: bus calendars, line and stop listings, routes, schedules,
//! real-time arrivals and stop search.
//!
//! # Architecture
//!
//! [`EmtClient`] defines the interface, implemented by [`OpenBusClient`]. Responses are returned as raw JSON; the application
//! layer normalizes them.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::ApiEndpoint;
//! use integration_emt::{EmtClient, EmtConfig, OpenBusClient};
//!
//! let client = OpenBusClient::from_config(&EmtConfig::default())?;
//!
//! let body = client
//!     .call(ApiEndpoint::GeoArriveStop, &[
//!         ("idStop".to_string(), "71".to_string()),
//!         ("cultureInfo".to_string(), "EN".to_string()),
//!     ])
//!     .await?;
//! ```

mod client;
mod config;
mod credentials;
mod endpoints;
mod error;

pub use client::{EmtClient, OpenBusClient};
pub use config::EmtConfig;
pub use credentials::EmtCredentials;
pub use endpoints::endpoint_path;
pub use error::EmtError;
