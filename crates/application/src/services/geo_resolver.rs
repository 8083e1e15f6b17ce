//! Geo resolver
//!
//! Turns a place name, or the caller's current position, into coordinates
//! plus an administrative zone name.

use std::{fmt, sync::Arc};

use domain::entities::ResolvedPlace;
use domain::value_objects::GeoLocation;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{AddressComponents, GeocodingPort},
};

/// Zone fields scanned when no zone is requested, most specific first
///
/// `suburb` appears twice; the second entry never matches anything the
/// first did not.
pub const ZONE_PRIORITY: [&str; 10] = [
    "street",
    "road",
    "neighbourhood",
    "suburb",
    "city",
    "town",
    "suburb",
    "state",
    "region",
    "country",
];

/// Pick the zone name out of a reverse-geocode result
///
/// With a hint, the named field is returned verbatim or
/// `ZoneFieldNotFound` is raised. Without one, the first field of
/// [`ZONE_PRIORITY`] that is present wins; `None` if none is.
pub fn select_zone(
    components: &AddressComponents,
    zone_hint: Option<&str>,
) -> Result<Option<String>, ApplicationError> {
    if let Some(field) = zone_hint {
        return components
            .get(field)
            .cloned()
            .map(Some)
            .ok_or_else(|| ApplicationError::zone_field_not_found(field));
    }

    Ok(ZONE_PRIORITY
        .iter()
        .find_map(|field| components.get(*field))
        .cloned())
}

/// Resolves places through the geocoding oracle
#[derive(Clone)]
pub struct GeoResolver {
    geocoding: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for GeoResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoResolver").finish_non_exhaustive()
    }
}

impl GeoResolver {
    /// Create a resolver on top of a geocoding port
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding }
    }

    /// Resolve coordinates and zone of a place
    ///
    /// A missing or empty `location` resolves the caller's current
    /// position. The zone is then picked by [`Self::resolve_zone`].
    #[instrument(skip(self))]
    pub async fn resolve_coordinates(
        &self,
        location: Option<&str>,
        zone_hint: Option<&str>,
    ) -> Result<ResolvedPlace, ApplicationError> {
        let point = self.locate(location).await?;
        let zone = self.resolve_zone(&point, zone_hint).await?;

        debug!(
            lat = point.latitude(),
            lon = point.longitude(),
            zone = zone.as_deref().unwrap_or("-"),
            "Resolved place"
        );
        Ok(ResolvedPlace::new(point, zone))
    }

    /// Coordinates only, skipping the zone lookup
    ///
    /// Any non-empty `location` is forwarded untouched, whitespace included.
    #[instrument(skip(self))]
    pub async fn locate(&self, location: Option<&str>) -> Result<GeoLocation, ApplicationError> {
        match location.filter(|l| !l.is_empty()) {
            Some(query) => self.geocoding.forward_geocode(query).await,
            None => {
                debug!("No location given, using current position");
                self.geocoding.current_position().await
            },
        }
    }

    /// Zone name of the place at `location`
    #[instrument(skip(self))]
    pub async fn resolve_zone(
        &self,
        location: &GeoLocation,
        zone_hint: Option<&str>,
    ) -> Result<Option<String>, ApplicationError> {
        let components = self.geocoding.reverse_geocode(location).await?;
        select_zone(&components, zone_hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockGeocodingPort;

    fn components(pairs: &[(&str, &str)]) -> AddressComponents {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn select_zone_prefers_most_specific_field() {
        let fields = components(&[("road", "Fenchurch St"), ("city", "London")]);
        assert_eq!(select_zone(&fields, None).unwrap(), Some("Fenchurch St".to_string()));
    }

    #[test]
    fn select_zone_falls_through_to_state() {
        let fields = components(&[("state", "X"), ("country", "Y")]);
        assert_eq!(select_zone(&fields, None).unwrap(), Some("X".to_string()));
    }

    #[test]
    fn select_zone_none_when_nothing_matches() {
        let fields = components(&[("postcode", "EC3M"), ("country_code", "gb")]);
        assert_eq!(select_zone(&fields, None).unwrap(), None);
    }

    #[test]
    fn select_zone_hint_is_returned_verbatim() {
        let fields = components(&[("city", "London"), ("country", "United Kingdom")]);
        assert_eq!(
            select_zone(&fields, Some("country")).unwrap(),
            Some("United Kingdom".to_string())
        );
    }

    #[test]
    fn select_zone_missing_hint_is_an_error() {
        let fields = components(&[("state", "X")]);
        let err = select_zone(&fields, Some("city")).unwrap_err();
        assert!(matches!(err, ApplicationError::ZoneFieldNotFound { ref field } if field == "city"));
    }

    #[test]
    fn zone_priority_keeps_duplicate_suburb() {
        assert_eq!(ZONE_PRIORITY.iter().filter(|f| **f == "suburb").count(), 2);
        assert_eq!(ZONE_PRIORITY[0], "street");
        assert_eq!(ZONE_PRIORITY[9], "country");
    }

    #[tokio::test]
    async fn resolve_coordinates_forward_lookup() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_forward_geocode()
            .withf(|q| q == "Fenchurch St, London")
            .times(1)
            .returning(|_| Ok(GeoLocation::new_unchecked(51.511_924_3, -0.080_823_1)));
        geocoding.expect_current_position().never();
        geocoding
            .expect_reverse_geocode()
            .times(1)
            .returning(|_| Ok(components(&[("country", "United Kingdom")])));

        let resolver = GeoResolver::new(Arc::new(geocoding));
        let place = resolver
            .resolve_coordinates(Some("Fenchurch St, London"), Some("country"))
            .await
            .unwrap();

        assert_eq!(place.zone.as_deref(), Some("United Kingdom"));
        assert!((place.latitude() - 51.511_924_3).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn resolve_coordinates_without_location_uses_current_position() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_forward_geocode().never();
        geocoding
            .expect_current_position()
            .times(2)
            .returning(|| Ok(GeoLocation::new_unchecked(18.52, 73.85)));
        geocoding
            .expect_reverse_geocode()
            .returning(|_| Ok(components(&[("suburb", "Shivajinagar"), ("city", "Pune")])));

        let resolver = GeoResolver::new(Arc::new(geocoding));
        let place = resolver.resolve_coordinates(None, None).await.unwrap();
        assert_eq!(place.zone.as_deref(), Some("Shivajinagar"));

        let place = resolver.resolve_coordinates(Some(""), None).await.unwrap();
        assert_eq!(place.zone.as_deref(), Some("Shivajinagar"));
    }

    #[tokio::test]
    async fn blank_location_is_forwarded_as_given() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_current_position().never();
        geocoding
            .expect_forward_geocode()
            .withf(|query| query == "   ")
            .times(1)
            .returning(|query| Err(ApplicationError::LocationNotFound(query.to_string())));

        let resolver = GeoResolver::new(Arc::new(geocoding));
        let err = resolver.locate(Some("   ")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::LocationNotFound(q) if q == "   "));
    }

    #[tokio::test]
    async fn authentication_failure_propagates() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_forward_geocode()
            .returning(|_| Err(ApplicationError::AuthenticationFailure("REQUEST_DENIED".into())));
        geocoding.expect_reverse_geocode().never();

        let resolver = GeoResolver::new(Arc::new(geocoding));
        let err = resolver.resolve_coordinates(Some("London"), None).await.unwrap_err();
        assert!(err.is_authentication_failure());
    }
}
