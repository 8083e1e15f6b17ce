//! Google Maps client
//!
//! Forward geocoding, caller geolocation and distance matrix lookups.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    config::MapsConfig,
    error::MapsError,
    models::{
        DistanceMatrixResponse, GeocodeResponse, GeolocateResponse, GoogleErrorBody, LatLng,
        RouteSummary,
    },
};

/// Trait for maps clients
#[async_trait]
pub trait MapsClient: Send + Sync {
    /// Coordinates of the first match for a free-form address
    async fn geocode(&self, address: &str) -> Result<GeoLocation, MapsError>;

    /// Estimated position of the caller (IP based)
    async fn geolocate(&self) -> Result<GeoLocation, MapsError>;

    /// Distance and duration of the first route between two points
    ///
    /// `mode` and `units` are forwarded verbatim.
    async fn distance_matrix(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        mode: &str,
        units: &str,
    ) -> Result<RouteSummary, MapsError>;
}

/// Google Maps Platform web service client
#[derive(Debug)]
pub struct GoogleMapsClient {
    client: Client,
    config: MapsConfig,
}

impl GoogleMapsClient {
    /// Create a new Google Maps client
    ///
    /// A missing API key is not an error here; every request fails with
    /// [`MapsError::AuthenticationFailed`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MapsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn api_key(&self) -> Result<&str, MapsError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MapsError::AuthenticationFailed("Maps API key is not set".to_string()))
    }

    fn map_send_error(&self, e: &reqwest::Error) -> MapsError {
        if e.is_timeout() {
            MapsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            MapsError::ConnectionFailed(e.to_string())
        }
    }

    /// Check the HTTP status and decode the JSON body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, MapsError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MapsError::ParseError(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(MapsError::AuthenticationFailed(error_message(&body, status)));
        }
        if !status.is_success() {
            return Err(MapsError::RequestFailed(error_message(&body, status)));
        }

        serde_json::from_str(&body).map_err(|e| MapsError::ParseError(e.to_string()))
    }
}

/// Message of a Google error body, or the HTTP status
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<GoogleErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn to_location(point: LatLng) -> Result<GeoLocation, MapsError> {
    GeoLocation::new(point.lat, point.lng).map_err(|e| MapsError::ParseError(e.to_string()))
}

#[async_trait]
impl MapsClient for GoogleMapsClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, MapsError> {
        let key = self.api_key()?;
        let url = format!("{}/maps/api/geocode/json", self.config.base_url);

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&[("address", address), ("key", key)])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let body: GeocodeResponse = Self::decode(response).await?;
        if let Some(err) =
            MapsError::from_status(&body.status, body.error_message.as_deref(), address)
        {
            warn!(status = %body.status, "Geocoding rejected");
            return Err(err);
        }

        let first = body
            .results
            .first()
            .ok_or_else(|| MapsError::NoResults(address.to_string()))?;

        let location = to_location(first.geometry.location)?;
        debug!(%address, lat = location.latitude(), lon = location.longitude(), "Geocoded address");
        Ok(location)
    }

    #[instrument(skip(self))]
    async fn geolocate(&self) -> Result<GeoLocation, MapsError> {
        let key = self.api_key()?;
        let url = format!("{}/geolocation/v1/geolocate", self.config.geolocation_url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&serde_json::json!({ "considerIp": true }))
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let body: GeolocateResponse = Self::decode(response).await?;
        debug!(accuracy = ?body.accuracy, "Geolocated caller");
        to_location(body.location)
    }

    #[instrument(
        skip(self, origin, destination),
        fields(origin = %origin.to_query_pair(), destination = %destination.to_query_pair())
    )]
    async fn distance_matrix(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        mode: &str,
        units: &str,
    ) -> Result<RouteSummary, MapsError> {
        let key = self.api_key()?;
        let url = format!("{}/maps/api/distancematrix/json", self.config.base_url);
        let origins = origin.to_query_pair();
        let destinations = destination.to_query_pair();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("origins", origins.as_str()),
                ("destinations", destinations.as_str()),
                ("mode", mode),
                ("units", units),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let body: DistanceMatrixResponse = Self::decode(response).await?;
        if let Some(err) =
            MapsError::from_status(&body.status, body.error_message.as_deref(), &destinations)
        {
            warn!(status = %body.status, "Distance matrix rejected");
            return Err(err);
        }

        let no_route = || MapsError::NoRoute {
            from: origins.clone(),
            to: destinations.clone(),
        };

        let element = body
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or_else(no_route)?;

        if element.status != "OK" {
            debug!(status = %element.status, "No route in distance matrix");
            return Err(no_route());
        }

        match (&element.distance, &element.duration) {
            (Some(distance), Some(duration)) => Ok(RouteSummary {
                distance_text: distance.text.clone(),
                duration_text: duration.text.clone(),
            }),
            _ => Err(MapsError::ParseError(
                "distance matrix element lacks distance or duration".to_string(),
            )),
        }
    }
}
