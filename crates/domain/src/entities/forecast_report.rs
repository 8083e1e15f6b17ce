//! Forecast report entity
//!
//! A report is a fixed, ordered record of fourteen phrased fields. It is
//! built once per request and never stored.

use serde::{Deserialize, Serialize};

use crate::value_objects::DayLabel;

/// Phrased weather report for one forecast window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Zone (city) the forecast is for
    pub zone: Option<String>,
    /// Window kind: 0 daily, 1 hourly, 2 current
    pub mode_tag: u8,
    /// Temperature with degree symbol
    pub temperature: String,
    /// Apparent temperature with degree symbol
    pub feels_like: String,
    /// Maximum apparent temperature with degree symbol
    pub max_temperature: String,
    /// Minimum apparent temperature with degree symbol
    pub min_temperature: String,
    /// Relative humidity as a percentage
    pub humidity: String,
    /// Wind speed with speed unit
    pub wind_speed: String,
    /// Overall daily summary, lowercased
    pub daily_summary: String,
    /// Normalized condition phrase of the selected window
    pub condition: String,
    /// "brighter" or "darker"
    pub sky: String,
    /// Compass label of the wind bearing, e.g. "northeastern"
    pub wind_direction: String,
    /// Part of day at call time
    pub part_of_day: String,
    /// Day the report refers to
    pub day_label: DayLabel,
    /// "day" or "days"
    pub day_grammar: String,
}

impl ForecastReport {
    /// The fourteen record fields in their fixed order
    ///
    /// The per-window condition phrase travels alongside the record and is
    /// not part of it.
    #[must_use]
    pub fn record(&self) -> ForecastRecord<'_> {
        ForecastRecord(
            self.zone.as_deref(),
            self.mode_tag,
            &self.temperature,
            &self.feels_like,
            &self.max_temperature,
            &self.min_temperature,
            &self.humidity,
            &self.wind_speed,
            &self.daily_summary,
            &self.sky,
            &self.wind_direction,
            &self.part_of_day,
            &self.day_label,
            &self.day_grammar,
        )
    }
}

/// Positional view of a [`ForecastReport`]
///
/// Serializes as a fourteen element array: zone (or null), mode tag,
/// temperature, feels like, max, min, humidity, wind speed, daily summary,
/// sky, wind direction, part of day, day label, day grammar. A day offset
/// without a name stays a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastRecord<'a>(
    pub Option<&'a str>,
    pub u8,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a str,
    pub &'a DayLabel,
    pub &'a str,
);

/// Result of composing a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "report", rename_all = "lowercase")]
pub enum ForecastOutcome {
    /// A report could be built
    Available(Box<ForecastReport>),
    /// The network was unreachable
    Unavailable,
}

impl ForecastOutcome {
    /// The report, if one was built
    #[must_use]
    pub fn report(&self) -> Option<&ForecastReport> {
        match self {
            Self::Available(report) => Some(report),
            Self::Unavailable => None,
        }
    }

    /// Whether the connectivity gate failed
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}
