//! Dark Sky compatible forecast client
//!
//! HTTP client for the `/forecast/{key}/{lat},{lon}` endpoint shared by
//! Dark Sky and its drop-in replacements.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::Forecast;

/// Forecast client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the forecast service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the forecast service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// The API key is missing or was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Request timed out")]
    Timeout,
}

/// Forecast service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key, sent as a path segment
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL (default: <https://api.pirateweather.net>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.pirateweather.net".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherConfig {
    /// Default endpoint with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }
}

/// Forecast client trait
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Current conditions plus hourly and daily series for a point
    ///
    /// `units` is the API unit scheme (`si`, `us`, `ca`, `uk2`).
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: &str,
    ) -> Result<Forecast, WeatherError>;
}

/// Dark Sky compatible HTTP client
#[derive(Debug)]
pub struct DarkSkyClient {
    client: Client,
    config: WeatherConfig,
}

impl DarkSkyClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the forecast URL for a point
    fn build_forecast_url(&self, key: &str, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast/{key}/{latitude},{longitude}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn api_key(&self) -> Result<&str, WeatherError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                WeatherError::AuthenticationFailed("Forecast API key is not set".to_string())
            })
    }
}

#[async_trait]
impl ForecastClient for DarkSkyClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: &str,
    ) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;
        let key = self.api_key()?;

        let url = self.build_forecast_url(key, latitude, longitude);
        debug!(%units, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&[("units", units)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(WeatherError::AuthenticationFailed(format!("HTTP {status}")));
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let forecast: Forecast = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        debug!(
            hourly = forecast.hourly.data.len(),
            daily = forecast.daily.data.len(),
            timezone = %forecast.timezone,
            "Fetched forecast"
        );
        Ok(forecast)
    }
}
