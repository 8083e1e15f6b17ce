//! Forecast window value object
//!
//! Exactly one window is active per forecast. Selection is positional:
//! a day offset wins over an hour offset, which wins over current
//! conditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slice of the forecast payload a report is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "offset", rename_all = "lowercase")]
pub enum ForecastWindow {
    /// Daily series entry at the given day offset (1..=7)
    Daily(u8),
    /// Hourly series entry at the given hour offset (1..=48)
    Hourly(u8),
    /// Current conditions
    Current,
}

impl ForecastWindow {
    /// Largest day offset served by the daily series
    pub const MAX_DAYS: i64 = 7;
    /// Largest hour offset served by the hourly series
    pub const MAX_HOURS: i64 = 48;

    /// Pick the window for the requested offsets
    ///
    /// Days in `1..=7` select the daily series; otherwise hours in `1..=48`
    /// select the hourly series; anything else falls back to current
    /// conditions.
    #[must_use]
    pub fn select(days: Option<i64>, hours: Option<i64>) -> Self {
        if let Some(days) = days.filter(|d| (1..=Self::MAX_DAYS).contains(d)) {
            return Self::Daily(Self::narrow(days));
        }
        if let Some(hours) = hours.filter(|h| (1..=Self::MAX_HOURS).contains(h)) {
            return Self::Hourly(Self::narrow(hours));
        }
        Self::Current
    }

    /// Integer tag of the window kind: 0 daily, 1 hourly, 2 current
    #[must_use]
    pub const fn mode_tag(&self) -> u8 {
        match self {
            Self::Daily(_) => 0,
            Self::Hourly(_) => 1,
            Self::Current => 2,
        }
    }

    // Callers have already range-checked the value.
    fn narrow(value: i64) -> u8 {
        u8::try_from(value).unwrap_or(u8::MAX)
    }
}

impl fmt::Display for ForecastWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily(days) => write!(f, "daily+{days}"),
            Self::Hourly(hours) => write!(f, "hourly+{hours}"),
            Self::Current => f.write_str("current"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_win_over_hours() {
        let window = ForecastWindow::select(Some(3), Some(10));
        assert_eq!(window, ForecastWindow::Daily(3));
        assert_eq!(window.mode_tag(), 0);
    }

    #[test]
    fn hours_used_when_days_out_of_range() {
        assert_eq!(
            ForecastWindow::select(Some(8), Some(10)),
            ForecastWindow::Hourly(10)
        );
        assert_eq!(
            ForecastWindow::select(Some(0), Some(48)),
            ForecastWindow::Hourly(48)
        );
        assert_eq!(ForecastWindow::select(None, Some(1)).mode_tag(), 1);
    }

    #[test]
    fn falls_back_to_current() {
        assert_eq!(ForecastWindow::select(None, None), ForecastWindow::Current);
        assert_eq!(ForecastWindow::select(None, Some(49)), ForecastWindow::Current);
        assert_eq!(ForecastWindow::select(Some(-1), Some(0)), ForecastWindow::Current);
        assert_eq!(ForecastWindow::select(None, Some(-5)), ForecastWindow::Current);
        assert_eq!(ForecastWindow::Current.mode_tag(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(ForecastWindow::Daily(2).to_string(), "daily+2");
        assert_eq!(ForecastWindow::Hourly(5).to_string(), "hourly+5");
        assert_eq!(ForecastWindow::Current.to_string(), "current");
    }
}
