//! Travel mode value object
//!
//! The routing oracle accepts `driving`, `walking`, `bicycling` and
//! `transit`. The mode is forwarded verbatim; the oracle rejects anything
//! else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode of travel forwarded to the routing oracle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelMode(String);

impl TravelMode {
    /// Driving by car
    pub const DRIVING: &'static str = "driving";
    /// Walking
    pub const WALKING: &'static str = "walking";
    /// Cycling
    pub const BICYCLING: &'static str = "bicycling";
    /// Public transit
    pub const TRANSIT: &'static str = "transit";

    /// Wrap a mode name
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    /// The mode name as sent to the oracle
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the oracle is documented to accept this mode
    #[must_use]
    pub fn is_known(&self) -> bool {
        [Self::DRIVING, Self::WALKING, Self::BICYCLING, Self::TRANSIT].contains(&self.0.as_str())
    }
}

impl Default for TravelMode {
    fn default() -> Self {
        Self::new(Self::WALKING)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TravelMode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
