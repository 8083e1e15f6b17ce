//! Calendar-relative day label

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day phrased relative to today
///
/// Offsets the heuristics cannot name are passed through as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayLabel {
    /// "today", "tomorrow", "day after tomorrow" or a weekday name
    Named(String),
    /// Unnamed day offset
    Count(i64),
}

impl DayLabel {
    /// Build a named label
    pub fn named(label: impl Into<String>) -> Self {
        Self::Named(label.into())
    }

    /// The label text, if the offset was named
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Count(_) => None,
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Count(days) => write!(f, "{days}"),
        }
    }
}
