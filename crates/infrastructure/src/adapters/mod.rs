//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod connectivity_probe;
mod forecast_adapter;
mod maps_adapter;
mod system_clock;

pub use connectivity_probe::{DEFAULT_PROBE_URL, HttpConnectivityProbe};
pub use forecast_adapter::ForecastAdapter;
pub use maps_adapter::MapsAdapter;
pub use system_clock::SystemClock;
