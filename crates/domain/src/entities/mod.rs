//! Domain entities - Records produced by the engine and the scaffolding flow

mod assistant_profile;
mod distance_estimate;
mod forecast_report;
mod resolved_place;

pub use assistant_profile::{AssistantProfile, ProfileStatus};
pub use distance_estimate::DistanceEstimate;
pub use forecast_report::{ForecastOutcome, ForecastRecord, ForecastReport};
pub use resolved_place::ResolvedPlace;
