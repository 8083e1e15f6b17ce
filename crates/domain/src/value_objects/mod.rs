//! Value Objects - Immutable, identity-less domain primitives

mod day_label;
mod forecast_window;
mod geo_location;
mod travel_mode;
mod unit_system;
mod week;

pub use day_label::DayLabel;
pub use forecast_window::ForecastWindow;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use travel_mode::TravelMode;
pub use unit_system::UnitSystem;
pub use week::{WEEK, weekday_after, weekday_index, weekday_name};
