//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod transit_api_port;
mod user_profile_store;

#[cfg(test)]
pub use transit_api_port::MockTransitApiPort;
pub use transit_api_port::{ApiParams, TransitApiPort};
#[cfg(test)]
pub use user_profile_store::MockUserProfileStore;
pub use user_profile_store::UserProfileStore;
