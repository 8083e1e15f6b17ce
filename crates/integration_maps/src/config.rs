//! Maps service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the Google Maps web services
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// API key; requests fail with an authentication error without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the geocoding and distance matrix APIs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for the geolocation API
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_geolocation_url() -> String {
    "https://www.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            geolocation_url: default_geolocation_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("geolocation_url", &self.geolocation_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MapsConfig {
    /// Default endpoints with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Point both APIs at one base URL (mock servers)
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            base_url: base_url.to_string(),
            geolocation_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }
}

/// Configuration for the Nominatim reverse geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request, required by the usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    format!("xa/{} (https://github.com/xames3/xa)", env!("CARGO_PKG_VERSION"))
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}
