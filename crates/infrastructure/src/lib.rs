//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the maps and
//! forecast integrations, and provides configuration loading, logging
//! initialization and template rendering.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{
    AppConfig, ConnectivityConfig, ForecastAppConfig, MapsAppConfig, NominatimAppConfig,
    ProfileDefaults,
};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
pub use templates::{TemplateEngine, TemplateError};
