//! Subscriber initialization and log level resolution
//!
//! Level precedence, highest first: command-line flag, `XA_LOG_LEVEL`,
//! the `logging.level` config value, `info`.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV: &str = "XA_LOG_LEVEL";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or filter directive, e.g. "info" or "xa=debug,reqwest=warn"
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Pick the filter directive from a flag, the environment and this config
    ///
    /// Blank values are skipped.
    #[must_use]
    pub fn effective_level(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env, Some(self.level.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|level| !level.is_empty())
            .map_or_else(default_level, str::to_string)
    }
}

/// Install the global subscriber
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Fails if the level is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, flag: Option<&str>) -> Result<(), TelemetryError> {
    let env = std::env::var(LOG_LEVEL_ENV).ok();
    let level = config.effective_level(flag, env.as_deref());
    let filter =
        EnvFilter::try_new(&level).map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(%level, json = config.json, "Logging initialized");
    Ok(())
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The level is not a valid filter directive
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}
