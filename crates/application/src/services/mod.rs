//! Application services - Use case implementations

mod distance_estimator;
mod forecast_composer;
mod geo_resolver;

pub use distance_estimator::DistanceEstimator;
pub use forecast_composer::{
    FORECAST_ZONE, ForecastComposer, ForecastRequest, day_grammar, format_number,
    normalize_condition, sky_brightness, wind_direction,
};
pub use geo_resolver::{GeoResolver, ZONE_PRIORITY, select_zone};
