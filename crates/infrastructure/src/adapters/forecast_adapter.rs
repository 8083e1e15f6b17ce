//! Forecast adapter - Implements ForecastPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ForecastDataPoint, ForecastPayload, ForecastPort};
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, UnitSystem};
use integration_weather::{DarkSkyClient, DataPoint, ForecastClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the Dark Sky compatible forecast service
pub struct ForecastAdapter {
    client: Arc<dyn ForecastClient>,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter").finish_non_exhaustive()
    }
}

impl ForecastAdapter {
    /// Create an adapter over an arbitrary client
    pub fn new(client: Arc<dyn ForecastClient>) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = DarkSkyClient::new(config).map_err(Self::map_error)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::AuthenticationFailed(msg) => ApplicationError::AuthenticationFailure(msg),
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::Timeout => {
                ApplicationError::ExternalService("forecast request timed out".into())
            },
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("invalid coordinates for forecast".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_point(point: DataPoint) -> ForecastDataPoint {
        ForecastDataPoint {
            summary: point.summary,
            temperature: point.temperature,
            apparent_temperature: point.apparent_temperature,
            apparent_temperature_max: point.apparent_temperature_max,
            apparent_temperature_min: point.apparent_temperature_min,
            humidity: point.humidity,
            wind_speed: point.wind_speed,
            wind_bearing: point.wind_bearing,
            cloud_cover: point.cloud_cover,
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<ForecastPayload, ApplicationError> {
        let forecast = self
            .client
            .get_forecast(location.latitude(), location.longitude(), units.forecast_units())
            .await
            .map_err(Self::map_error)?;

        debug!(
            hourly = forecast.hourly.data.len(),
            daily = forecast.daily.data.len(),
            "Retrieved forecast"
        );

        Ok(ForecastPayload {
            currently: Self::map_point(forecast.currently),
            hourly: forecast.hourly.data.into_iter().map(Self::map_point).collect(),
            daily: forecast.daily.data.into_iter().map(Self::map_point).collect(),
            daily_summary: forecast.daily.summary,
        })
    }
}
