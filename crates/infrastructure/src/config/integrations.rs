//! Oracle configurations: maps, Nominatim, forecast, connectivity.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::adapters::DEFAULT_PROBE_URL;

// ==============================
// Maps Configuration
// ==============================

/// Google Maps web services configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MapsAppConfig {
    /// API key for geocoding, geolocation and distance matrix
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Geocoding and distance matrix base URL
    #[serde(default = "default_maps_base_url")]
    pub base_url: String,

    /// Geolocation base URL
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,
}

fn default_maps_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_geolocation_url() -> String {
    "https://www.googleapis.com".to_string()
}

const fn default_oracle_timeout() -> u64 {
    10
}

impl Default for MapsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_maps_base_url(),
            geolocation_url: default_geolocation_url(),
            timeout_secs: default_oracle_timeout(),
        }
    }
}

impl MapsAppConfig {
    /// Convert to `integration_maps`'s `MapsConfig`
    #[must_use]
    pub fn to_maps_config(&self) -> integration_maps::MapsConfig {
        integration_maps::MapsConfig {
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            base_url: self.base_url.clone(),
            geolocation_url: self.geolocation_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Nominatim Configuration
// ==============================

/// Nominatim reverse geocoding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimAppConfig {
    /// Nominatim base URL
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

impl Default for NominatimAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
            timeout_secs: default_oracle_timeout(),
            user_agent: None,
        }
    }
}

impl NominatimAppConfig {
    /// Convert to `integration_maps`'s `NominatimConfig`
    #[must_use]
    pub fn to_nominatim_config(&self) -> integration_maps::NominatimConfig {
        let defaults = integration_maps::NominatimConfig::default();
        integration_maps::NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

// ==============================
// Forecast Configuration
// ==============================

/// Dark Sky compatible forecast service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastAppConfig {
    /// API key, sent as a path segment
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Forecast base URL
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_forecast_base_url() -> String {
    "https://api.pirateweather.net".to_string()
}

impl Default for ForecastAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_forecast_base_url(),
            timeout_secs: None,
        }
    }
}

impl ForecastAppConfig {
    /// Convert to `integration_weather`'s `WeatherConfig`
    #[must_use]
    pub fn to_weather_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Connectivity Configuration
// ==============================

/// Connectivity probe configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectivityConfig {
    /// URL probed before fetching a forecast
    #[serde(default = "default_probe_url")]
    pub url: String,

    /// Probe timeout in seconds
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,
}

fn default_probe_url() -> String {
    DEFAULT_PROBE_URL.to_string()
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            url: default_probe_url(),
            timeout_secs: default_oracle_timeout(),
        }
    }
}

impl ConnectivityConfig {
    /// Probe timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
