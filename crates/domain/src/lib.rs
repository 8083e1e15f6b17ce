//! Domain layer for xa
//!
//! Contains the value objects and entities exchanged by the location and
//! weather engine. This layer performs no I/O and defines the vocabulary
//! shared by the application and infrastructure layers.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
