//! Google Maps web service response models

use serde::{Deserialize, Serialize};

/// Human-readable distance and duration of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Distance text, e.g. "8,731 km"
    pub distance_text: String,
    /// Duration text, e.g. "71 days 23 hours"
    pub duration_text: String,
}

/// Latitude/longitude pair as returned by the APIs
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Geocoding API response
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

/// Geolocation API response
#[derive(Debug, Deserialize)]
pub(crate) struct GeolocateResponse {
    pub location: LatLng,
    pub accuracy: Option<f64>,
}

/// Error body of the geolocation API (non-2xx responses)
#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorBody {
    pub error: GoogleError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleError {
    pub message: Option<String>,
}

/// Distance matrix API response
#[derive(Debug, Deserialize)]
pub(crate) struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<DistanceMatrixRow>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistanceMatrixRow {
    #[serde(default)]
    pub elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistanceMatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextValue {
    pub text: String,
}
