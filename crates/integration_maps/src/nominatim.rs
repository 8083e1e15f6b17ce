//! Nominatim reverse geocoding client
//!
//! Turns a point into the OpenStreetMap address fields of the place at
//! that point (`road`, `suburb`, `city`, `state`, `country`, ...).

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{config::NominatimConfig, error::MapsError};

/// Address field name to value
pub type AddressFields = BTreeMap<String, String>;

/// Trait for reverse geocoding clients
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Address fields of the place at `location`
    async fn reverse(&self, location: &GeoLocation) -> Result<AddressFields, MapsError>;
}

/// Nominatim-based reverse geocoder
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a new Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| MapsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

/// Flatten a raw response into address fields
///
/// Only string values are kept. `street` is filled from `road` when the
/// response has no street of its own.
fn address_fields(raw: NominatimReverse) -> AddressFields {
    let mut fields: AddressFields = raw
        .address
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect();

    if let Some(road) = fields.get("road").cloned() {
        fields.entry("street".to_string()).or_insert(road);
    }
    if let Some(name) = raw.display_name {
        fields.entry("address".to_string()).or_insert(name);
    }
    fields
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn reverse(&self, location: &GeoLocation) -> Result<AddressFields, MapsError> {
        let url = format!("{}/reverse", self.config.base_url);
        let params = [
            ("lat", location.latitude().to_string()),
            ("lon", location.longitude().to_string()),
            ("format", "jsonv2".to_string()),
            ("addressdetails", "1".to_string()),
        ];

        debug!("Reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MapsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    MapsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimitExceeded {
                retry_after_secs: None,
            });
        }
        if !status.is_success() {
            return Err(MapsError::RequestFailed(format!("HTTP {status}")));
        }

        let raw: NominatimReverse = response
            .json()
            .await
            .map_err(|e| MapsError::ParseError(e.to_string()))?;

        if let Some(error) = raw.error {
            return Err(MapsError::NoResults(format!("{location} ({error})")));
        }

        let fields = address_fields(raw);
        debug!(count = fields.len(), "Reverse geocoded");
        Ok(fields)
    }
}

/// Raw Nominatim reverse response
#[derive(Debug, Deserialize)]
struct NominatimReverse {
    #[serde(default)]
    address: serde_json::Map<String, serde_json::Value>,
    display_name: Option<String>,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_result_parsing() {
        let json = r#"{
            "place_id": 1,
            "display_name": "Fenchurch Street, City of London, Greater London, England, United Kingdom",
            "address": {
                "road": "Fenchurch Street",
                "city": "City of London",
                "state": "England",
                "country": "United Kingdom",
                "country_code": "gb"
            }
        }"#;
        let raw: NominatimReverse = serde_json::from_str(json).unwrap();
        let fields = address_fields(raw);

        assert_eq!(fields.get("street").map(String::as_str), Some("Fenchurch Street"));
        assert_eq!(fields.get("road").map(String::as_str), Some("Fenchurch Street"));
        assert_eq!(fields.get("city").map(String::as_str), Some("City of London"));
        assert!(fields.get("address").is_some());
    }

    #[test]
    fn test_non_string_values_are_dropped() {
        let json = r#"{"address": {"state": "X", "ISO3166-2-lvl4": "GB-ENG", "rank": 5}}"#;
        let fields = address_fields(serde_json::from_str(json).unwrap());
        assert!(fields.contains_key("state"));
        assert!(!fields.contains_key("rank"));
        assert!(!fields.contains_key("street"));
    }

    #[test]
    fn test_error_response_parsing() {
        let raw: NominatimReverse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert_eq!(raw.error.as_deref(), Some("Unable to geocode"));
        assert!(raw.address.is_empty());
    }
}
