//! Travel distance between two places

use serde::{Deserialize, Serialize};

/// Human-readable distance and duration, as phrased by the routing oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    /// Distance text, e.g. "12.3 km"
    pub distance_text: String,
    /// Duration text, e.g. "2 hours 31 mins"
    pub duration_text: String,
}

impl DistanceEstimate {
    /// Create an estimate from the oracle's text fields
    pub fn new(distance_text: impl Into<String>, duration_text: impl Into<String>) -> Self {
        Self {
            distance_text: distance_text.into(),
            duration_text: duration_text.into(),
        }
    }
}
