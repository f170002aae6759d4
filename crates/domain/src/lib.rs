//! Domain layer for madtrans
//!
//! Contains the query model, the typed transit API records, value objects
//! and domain errors. This layer performs no I/O and defines the ubiquitous
//! language shared by the other crates.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
