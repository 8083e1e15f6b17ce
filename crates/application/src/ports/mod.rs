//! Port definitions for application layer
//!
//! Ports are interfaces that define how the engine talks to the external
//! oracles. Adapters in the infrastructure layer implement these ports.

mod clock_port;
mod connectivity_port;
mod forecast_port;
mod geocoding_port;
mod routing_port;

#[cfg(test)]
pub use clock_port::MockClockPort;
pub use clock_port::ClockPort;
#[cfg(test)]
pub use connectivity_port::MockConnectivityPort;
pub use connectivity_port::ConnectivityPort;
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::{ForecastDataPoint, ForecastPayload, ForecastPort};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{AddressComponents, GeocodingPort};
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
