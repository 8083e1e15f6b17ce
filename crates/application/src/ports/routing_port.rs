//! Routing port
//!
//! Travel distance and duration between two points.

use async_trait::async_trait;
use domain::entities::DistanceEstimate;
use domain::value_objects::{GeoLocation, TravelMode, UnitSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for routing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Distance and duration text of the first route between two points
    ///
    /// The mode is forwarded verbatim; an unsupported mode is reported by
    /// the oracle.
    async fn distance_matrix(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        mode: &TravelMode,
        units: UnitSystem,
    ) -> Result<DistanceEstimate, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RoutingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }
}
