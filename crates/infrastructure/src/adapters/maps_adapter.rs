//! Maps adapter - Implements GeocodingPort and RoutingPort using integration_maps

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{AddressComponents, GeocodingPort, RoutingPort};
use async_trait::async_trait;
use domain::entities::DistanceEstimate;
use domain::value_objects::{GeoLocation, TravelMode, UnitSystem};
use integration_maps::{
    GoogleMapsClient, MapsClient, MapsConfig, MapsError, NominatimClient, NominatimConfig,
    ReverseGeocoder,
};
use tracing::{debug, instrument};

/// Adapter for Google forward lookups and routing plus Nominatim reverse lookups
pub struct MapsAdapter {
    maps: Arc<dyn MapsClient>,
    reverse: Arc<dyn ReverseGeocoder>,
}

impl std::fmt::Debug for MapsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsAdapter").finish_non_exhaustive()
    }
}

impl MapsAdapter {
    /// Create an adapter over arbitrary clients
    pub fn new(maps: Arc<dyn MapsClient>, reverse: Arc<dyn ReverseGeocoder>) -> Self {
        Self { maps, reverse }
    }

    /// Create an adapter backed by Google and Nominatim
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client fails to initialize.
    pub fn from_config(
        maps: &MapsConfig,
        nominatim: &NominatimConfig,
    ) -> Result<Self, ApplicationError> {
        let google = GoogleMapsClient::new(maps).map_err(map_maps_error)?;
        let reverse = NominatimClient::new(nominatim).map_err(map_maps_error)?;
        Ok(Self::new(Arc::new(google), Arc::new(reverse)))
    }
}

/// Map integration maps error to application error
pub(crate) fn map_maps_error(err: MapsError) -> ApplicationError {
    match err {
        MapsError::AuthenticationFailed(msg) => ApplicationError::AuthenticationFailure(msg),
        MapsError::NoResults(query) => ApplicationError::LocationNotFound(query),
        MapsError::NoRoute { from, to } => {
            ApplicationError::RouteNotFound(format!("{from} -> {to}"))
        },
        MapsError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        MapsError::ConnectionFailed(msg) | MapsError::RequestFailed(msg) => {
            ApplicationError::ExternalService(msg)
        },
        MapsError::Timeout { timeout_secs } => {
            ApplicationError::ExternalService(format!("maps request timed out after {timeout_secs}s"))
        },
        MapsError::ParseError(msg) => ApplicationError::Internal(msg),
    }
}

#[async_trait]
impl GeocodingPort for MapsAdapter {
    #[instrument(skip(self))]
    async fn forward_geocode(&self, query: &str) -> Result<GeoLocation, ApplicationError> {
        let location = self.maps.geocode(query).await.map_err(map_maps_error)?;
        debug!(%location, "Forward geocoded");
        Ok(location)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn reverse_geocode(
        &self,
        location: &GeoLocation,
    ) -> Result<AddressComponents, ApplicationError> {
        let fields = self.reverse.reverse(location).await.map_err(map_maps_error)?;
        debug!(fields = fields.len(), "Reverse geocoded");
        Ok(fields)
    }

    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        let location = self.maps.geolocate().await.map_err(map_maps_error)?;
        debug!(%location, "Resolved current position");
        Ok(location)
    }
}

#[async_trait]
impl RoutingPort for MapsAdapter {
    #[instrument(skip(self, origin, destination, mode), fields(mode = %mode, units = %units))]
    async fn distance_matrix(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        mode: &TravelMode,
        units: UnitSystem,
    ) -> Result<DistanceEstimate, ApplicationError> {
        let route = self
            .maps
            .distance_matrix(origin, destination, mode.as_str(), units.routing_units())
            .await
            .map_err(map_maps_error)?;

        Ok(DistanceEstimate::new(route.distance_text, route.duration_text))
    }
}
