//! A geocoded place

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::GeoLocation;

/// Coordinates of a place plus the administrative zone it falls in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Resolved coordinates
    pub location: GeoLocation,
    /// Zone name picked from the reverse lookup, if any
    pub zone: Option<String>,
}

impl ResolvedPlace {
    /// Create a resolved place
    #[must_use]
    pub const fn new(location: GeoLocation, zone: Option<String>) -> Self {
        Self { location, zone }
    }

    /// Latitude of the place
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    /// Longitude of the place
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }
}

impl fmt::Display for ResolvedPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{zone} ({})", self.location),
            None => write!(f, "{}", self.location),
        }
    }
}
