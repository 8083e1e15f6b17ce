//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: maps, Nominatim, forecast and connectivity endpoints
//! - `profile`: defaults offered when scaffolding a profile
//!
//! Logging settings live next to the subscriber in [`crate::telemetry`].

mod integrations;
mod profile;

use std::path::Path;

use application::error::ApplicationError;
use serde::Deserialize;
use tracing::debug;

use crate::telemetry::LoggingConfig;

pub use integrations::{ConnectivityConfig, ForecastAppConfig, MapsAppConfig, NominatimAppConfig};
pub use profile::ProfileDefaults;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "XA";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Google Maps configuration
    #[serde(default)]
    pub maps: MapsAppConfig,

    /// Nominatim configuration
    #[serde(default)]
    pub nominatim: NominatimAppConfig,

    /// Forecast service configuration
    #[serde(default)]
    pub forecast: ForecastAppConfig,

    /// Connectivity probe configuration
    #[serde(default)]
    pub connectivity: ConnectivityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Profile prompt defaults
    #[serde(default)]
    pub profile: ProfileDefaults,
}

impl AppConfig {
    /// Load configuration from a file and the environment
    ///
    /// With `None` an optional `config.toml` in the working directory is
    /// read. An explicit file must exist. Environment variables use the
    /// `XA_` prefix and `__` between sections, e.g. `XA_MAPS__API_KEY`.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(file, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(
        file: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file_source)
            .add_source(environment)
            .build()?;

        let app: Self = config.try_deserialize()?;
        debug!(config = ?app, "Configuration loaded");
        Ok(app)
    }

    /// Problems that would make every oracle call fail
    ///
    /// Missing API keys are not listed; they surface as authentication
    /// failures on first use.
    #[must_use]
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let urls = [
            ("maps.base_url", &self.maps.base_url),
            ("maps.geolocation_url", &self.maps.geolocation_url),
            ("nominatim.base_url", &self.nominatim.base_url),
            ("forecast.base_url", &self.forecast.base_url),
            ("connectivity.url", &self.connectivity.url),
        ];
        for (key, value) in urls {
            if value.trim().is_empty() {
                issues.push(format!("{key} must not be empty"));
            }
        }

        let timeouts = [
            ("maps.timeout_secs", Some(self.maps.timeout_secs)),
            ("nominatim.timeout_secs", Some(self.nominatim.timeout_secs)),
            ("forecast.timeout_secs", self.forecast.timeout_secs),
            ("connectivity.timeout_secs", Some(self.connectivity.timeout_secs)),
        ];
        for (key, value) in timeouts {
            if value == Some(0) {
                issues.push(format!("{key} must be greater than zero"));
            }
        }

        issues
    }

    /// Fail on the first batch of validation issues
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let issues = self.validation_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Configuration(issues.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::build(None, env(&[])).unwrap();
        assert!(config.maps.api_key.is_none());
        assert!(config.forecast.api_key.is_none());
        assert_eq!(config.maps.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.profile.assistant_name, "Charlotte");
        assert_eq!(config.profile.action_server_port, 6969);
        assert_eq!(config.profile.socket_port, 1414);
    }

    #[test]
    fn file_values_are_read() {
        let file = toml_file(
            r#"
[maps]
api_key = "file-maps-key"
timeout_secs = 20

[forecast]
base_url = "http://localhost:9000"
timeout_secs = 30

[logging]
level = "debug"
json = true
"#,
        );

        let config = AppConfig::build(Some(file.path()), env(&[])).unwrap();
        assert_eq!(
            config.maps.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("file-maps-key".to_string())
        );
        assert_eq!(config.maps.timeout_secs, 20);
        assert_eq!(config.forecast.base_url, "http://localhost:9000");
        assert_eq!(config.forecast.timeout_secs, Some(30));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[maps]\napi_key = \"file-key\"\n");
        let config = AppConfig::build(
            Some(file.path()),
            env(&[
                ("XA_MAPS__API_KEY", "env-key"),
                ("XA_CONNECTIVITY__TIMEOUT_SECS", "3"),
            ]),
        )
        .unwrap();

        assert_eq!(
            config.maps.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("env-key".to_string())
        );
        assert_eq!(config.connectivity.timeout_secs, 3);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::build(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_reports_empty_urls_and_zero_timeouts() {
        let mut config = AppConfig::default();
        config.maps.base_url = String::new();
        config.forecast.timeout_secs = Some(0);
        config.connectivity.timeout_secs = 0;

        let issues = config.validation_issues();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.starts_with("maps.base_url")));
        assert!(issues.iter().any(|i| i.starts_with("forecast.timeout_secs")));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn debug_output_hides_keys() {
        let file = toml_file("[forecast]\napi_key = \"very-secret\"\n");
        let config = AppConfig::build(Some(file.path()), env(&[])).unwrap();
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
