//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod emt_api_adapter;
mod profile_store;

pub use emt_api_adapter::EmtApiAdapter;
pub use profile_store::{FileUserProfileStore, InMemoryUserProfileStore};
