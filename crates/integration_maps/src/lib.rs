//! Maps integration for xa
//!
//! Provides forward geocoding, caller geolocation and distance matrix
//! lookups via the [Google Maps Platform](https://developers.google.com/maps)
//! web services, and reverse geocoding into address fields via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`MapsClient`] defines the Google-backed operations
//! and is implemented by [`GoogleMapsClient`]. [`ReverseGeocoder`] turns a
//! point into address fields and is implemented by [`NominatimClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_maps::{GoogleMapsClient, MapsClient, MapsConfig};
//!
//! let config = MapsConfig::with_api_key("...");
//! let client = GoogleMapsClient::new(&config)?;
//!
//! let london = client.geocode("Fenchurch St, London").await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod nominatim;

pub use client::{GoogleMapsClient, MapsClient};
pub use config::{MapsConfig, NominatimConfig};
pub use error::MapsError;
pub use models::RouteSummary;
pub use nominatim::{AddressFields, NominatimClient, ReverseGeocoder};
