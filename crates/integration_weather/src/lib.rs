//! Forecast integration
//!
//! Client for Dark Sky compatible forecast APIs, by default
//! [Pirate Weather](https://pirateweather.net). One request returns current
//! conditions plus the hourly and daily series for a point.

pub mod client;
mod models;

pub use client::{DarkSkyClient, ForecastClient, WeatherConfig, WeatherError};
pub use models::{DataBlock, DataPoint, Forecast};
