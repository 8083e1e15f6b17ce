//! Logging infrastructure
//!
//! Installs the `tracing` subscriber used by the CLI.

mod logging;

pub use logging::{LOG_LEVEL_ENV, LoggingConfig, TelemetryError, init_logging};
