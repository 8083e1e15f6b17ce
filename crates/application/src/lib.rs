//! Application layer - Use cases and orchestration
//!
//! Contains the location and weather engine: the temporal heuristics, the
//! port definitions for the external oracles, and the services that
//! orchestrate them.

pub mod error;
pub mod ports;
pub mod services;
pub mod temporal;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use temporal::{FixedChooser, PhraseChooser, RandomChooser};
