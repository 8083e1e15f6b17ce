//! Forecast service port
//!
//! Defines the interface for weather forecast retrieval.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, UnitSystem};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One entry of the forecast payload (current, hourly or daily)
///
/// Values are in the unit system the forecast was requested in. Fractions
/// (`humidity`, `cloud_cover`) are in `0.0..=1.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDataPoint {
    /// One-line condition summary, e.g. "Light rain."
    pub summary: String,
    /// Air temperature (current and hourly entries)
    pub temperature: Option<f64>,
    /// Apparent temperature (current and hourly entries)
    pub apparent_temperature: Option<f64>,
    /// Daily maximum apparent temperature (daily entries)
    pub apparent_temperature_max: Option<f64>,
    /// Daily minimum apparent temperature (daily entries)
    pub apparent_temperature_min: Option<f64>,
    /// Relative humidity fraction
    pub humidity: f64,
    /// Wind speed
    pub wind_speed: f64,
    /// Wind bearing in degrees, 0 meaning from the north
    pub wind_bearing: f64,
    /// Cloud cover fraction
    pub cloud_cover: f64,
}

/// Full forecast for one point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    /// Current conditions
    pub currently: ForecastDataPoint,
    /// Hourly series, index 0 being the current hour
    pub hourly: Vec<ForecastDataPoint>,
    /// Daily series, index 0 being today
    pub daily: Vec<ForecastDataPoint>,
    /// Summary of the whole daily series
    pub daily_summary: String,
}

/// Port for forecast operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch current, hourly and daily forecast for a location
    async fn get_forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<ForecastPayload, ApplicationError>;
}
