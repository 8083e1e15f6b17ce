//! Distance estimator
//!
//! Travel distance and duration between two places.

use std::{fmt, sync::Arc};

use domain::entities::DistanceEstimate;
use domain::value_objects::{TravelMode, UnitSystem};
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::RoutingPort, services::GeoResolver};

/// Estimates travel between places via the routing oracle
pub struct DistanceEstimator {
    resolver: GeoResolver,
    routing: Arc<dyn RoutingPort>,
}

impl fmt::Debug for DistanceEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceEstimator")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl DistanceEstimator {
    /// Create a new estimator
    pub fn new(resolver: GeoResolver, routing: Arc<dyn RoutingPort>) -> Self {
        Self { resolver, routing }
    }

    /// Distance and duration from `origin` (or the current position) to
    /// `destination`
    ///
    /// The origin is resolved before the destination. Both go through the
    /// full coordinate resolution, reverse lookup included.
    #[instrument(skip(self, mode), fields(mode = %mode))]
    pub async fn estimate(
        &self,
        destination: &str,
        origin: Option<&str>,
        mode: &TravelMode,
        units: UnitSystem,
    ) -> Result<DistanceEstimate, ApplicationError> {
        let origin = self.resolver.resolve_coordinates(origin, None).await?;
        let destination = self
            .resolver
            .resolve_coordinates(Some(destination), None)
            .await?;

        let estimate = self
            .routing
            .distance_matrix(&origin.location, &destination.location, mode, units)
            .await?;

        info!(
            distance = %estimate.distance_text,
            duration = %estimate.duration_text,
            "Estimated distance"
        );
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::ports::{AddressComponents, MockGeocodingPort, MockRoutingPort};
    use domain::value_objects::GeoLocation;

    fn geocoding_with_current_position() -> MockGeocodingPort {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_current_position()
            .times(1)
            .returning(|| Ok(GeoLocation::new_unchecked(18.52, 73.85)));
        geocoding
            .expect_forward_geocode()
            .withf(|q| q == "London")
            .times(1)
            .returning(|_| Ok(GeoLocation::new_unchecked(51.5, -0.12)));
        geocoding
            .expect_reverse_geocode()
            .returning(|_| Ok(AddressComponents::new()));
        geocoding
    }

    #[tokio::test]
    async fn origin_defaults_to_current_position() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_distance_matrix()
            .withf(|origin, destination, mode, units| {
                (origin.latitude() - 18.52).abs() < f64::EPSILON
                    && (destination.latitude() - 51.5).abs() < f64::EPSILON
                    && mode.as_str() == "walking"
                    && *units == UnitSystem::Metric
            })
            .times(1)
            .returning(|_, _, _, _| Ok(DistanceEstimate::new("8,731 km", "71 days 23 hours")));

        let estimator = DistanceEstimator::new(
            GeoResolver::new(Arc::new(geocoding_with_current_position())),
            Arc::new(routing),
        );
        let estimate = estimator
            .estimate("London", None, &TravelMode::default(), UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(estimate.distance_text, "8,731 km");
        assert_eq!(estimate.duration_text, "71 days 23 hours");
    }

    #[tokio::test]
    async fn origin_resolved_before_destination() {
        let mut seq = Sequence::new();
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_forward_geocode()
            .withf(|q| q == "Paris")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(GeoLocation::new_unchecked(48.85, 2.35)));
        geocoding
            .expect_reverse_geocode()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(AddressComponents::new()));
        geocoding
            .expect_forward_geocode()
            .withf(|q| q == "Berlin")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(GeoLocation::new_unchecked(52.52, 13.40)));
        geocoding
            .expect_reverse_geocode()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(AddressComponents::new()));

        let mut routing = MockRoutingPort::new();
        routing
            .expect_distance_matrix()
            .withf(|_, _, mode, units| mode.as_str() == "driving" && *units == UnitSystem::Imperial)
            .returning(|_, _, _, _| Ok(DistanceEstimate::new("654 mi", "9 hours 50 mins")));

        let estimator = DistanceEstimator::new(GeoResolver::new(Arc::new(geocoding)), Arc::new(routing));
        let estimate = estimator
            .estimate(
                "Berlin",
                Some("Paris"),
                &TravelMode::from(TravelMode::DRIVING),
                UnitSystem::Imperial,
            )
            .await
            .unwrap();

        assert_eq!(estimate.distance_text, "654 mi");
    }

    #[tokio::test]
    async fn routing_error_propagates() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_distance_matrix()
            .returning(|_, _, _, _| Err(ApplicationError::RouteNotFound("ZERO_RESULTS".into())));

        let estimator = DistanceEstimator::new(
            GeoResolver::new(Arc::new(geocoding_with_current_position())),
            Arc::new(routing),
        );
        let err = estimator
            .estimate("London", None, &TravelMode::from("teleport"), UnitSystem::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::RouteNotFound(_)));
    }
}
