//! Unit system value object
//!
//! Selects the vocabulary shared by the routing and forecast oracles and the
//! phrasing of a forecast report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metric or imperial units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// SI units, degrees Celsius, kilometres
    #[default]
    Metric,
    /// US units, degrees Fahrenheit, miles
    Imperial,
}

impl UnitSystem {
    /// Pick the unit system from a `metric` flag
    #[must_use]
    pub const fn from_metric(metric: bool) -> Self {
        if metric { Self::Metric } else { Self::Imperial }
    }

    /// Unit name understood by the routing oracle
    #[must_use]
    pub const fn routing_units(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Unit name understood by the forecast oracle
    #[must_use]
    pub const fn forecast_units(&self) -> &'static str {
        match self {
            Self::Metric => "si",
            Self::Imperial => "us",
        }
    }

    /// Degree symbol appended to temperatures
    #[must_use]
    pub const fn degree_symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Speed unit appended to wind speeds
    #[must_use]
    pub const fn speed_unit(&self) -> &'static str {
        match self {
            Self::Metric => "kph",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.routing_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_vocabulary() {
        let units = UnitSystem::from_metric(true);
        assert_eq!(units, UnitSystem::Metric);
        assert_eq!(units.forecast_units(), "si");
        assert_eq!(units.degree_symbol(), "°C");
        assert_eq!(units.speed_unit(), "kph");
        assert_eq!(units.routing_units(), "metric");
    }

    #[test]
    fn imperial_vocabulary() {
        let units = UnitSystem::from_metric(false);
        assert_eq!(units, UnitSystem::Imperial);
        assert_eq!(units.forecast_units(), "us");
        assert_eq!(units.degree_symbol(), "°F");
        assert_eq!(units.speed_unit(), "mph");
        assert_eq!(units.to_string(), "imperial");
    }

    #[test]
    fn default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }
}
