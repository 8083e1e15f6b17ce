//! Forecast data models
//!
//! Types for the Dark Sky forecast response format.

use serde::{Deserialize, Serialize};

/// Conditions at one point in time
///
/// Which fields are present depends on the block: `temperature` only
/// appears in current and hourly points, `apparentTemperatureMax/Min` only
/// in daily points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Unix timestamp of the point
    #[serde(default)]
    pub time: i64,
    /// One-line summary, e.g. "Light Rain."
    #[serde(default)]
    pub summary: String,
    /// Icon name, e.g. "rain"
    pub icon: Option<String>,
    /// Air temperature
    pub temperature: Option<f64>,
    /// Apparent temperature
    pub apparent_temperature: Option<f64>,
    /// Daily maximum apparent temperature
    pub apparent_temperature_max: Option<f64>,
    /// Daily minimum apparent temperature
    pub apparent_temperature_min: Option<f64>,
    /// Relative humidity, 0 to 1
    #[serde(default)]
    pub humidity: f64,
    /// Wind speed
    #[serde(default)]
    pub wind_speed: f64,
    /// Direction the wind comes from, degrees clockwise from north
    #[serde(default)]
    pub wind_bearing: f64,
    /// Sky fraction covered by clouds, 0 to 1
    #[serde(default)]
    pub cloud_cover: f64,
}

/// A series of data points with an overall summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataBlock {
    /// Summary of the whole block
    #[serde(default)]
    pub summary: String,
    /// Points in chronological order
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// Full forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Requested latitude
    pub latitude: f64,
    /// Requested longitude
    pub longitude: f64,
    /// IANA timezone of the point
    #[serde(default)]
    pub timezone: String,
    /// Current conditions
    #[serde(default)]
    pub currently: DataPoint,
    /// Hour-by-hour forecast, 48 hours
    #[serde(default)]
    pub hourly: DataBlock,
    /// Day-by-day forecast, 8 days
    #[serde(default)]
    pub daily: DataBlock,
}
