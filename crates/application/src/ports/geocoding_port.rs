//! Geocoding port
//!
//! Forward lookup, reverse lookup and "where am I" resolution.

use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Reverse-geocode result: address field name to value
///
/// Field names follow OpenStreetMap address keys (`road`, `suburb`,
/// `city`, `state`, `country`, ...).
pub type AddressComponents = BTreeMap<String, String>;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Coordinates of the first match for a free-form place name
    ///
    /// Fails with `LocationNotFound` when the oracle has no match and with
    /// `AuthenticationFailure` when the credential is rejected.
    async fn forward_geocode(&self, query: &str) -> Result<GeoLocation, ApplicationError>;

    /// Address fields of the place at the given point
    async fn reverse_geocode(
        &self,
        location: &GeoLocation,
    ) -> Result<AddressComponents, ApplicationError>;

    /// Estimated position of the caller
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError>;
}
