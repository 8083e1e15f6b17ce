//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A weekday name that is not part of the Monday-first week
    #[error("Weekday not recognized: {0}")]
    WeekdayNotRecognized(String),

    /// The weekday does not occur in the window computed from today
    #[error("Weekday {day} does not occur in the window starting {today}")]
    WeekdayOutsideWindow { day: String, today: String },

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a weekday-outside-window error
    pub fn weekday_outside_window(day: impl Into<String>, today: impl Into<String>) -> Self {
        Self::WeekdayOutsideWindow {
            day: day.into(),
            today: today.into(),
        }
    }
}

impl From<InvalidCoordinates> for DomainError {
    fn from(err: InvalidCoordinates) -> Self {
        Self::InvalidCoordinates(format!("{}, {}", err.latitude, err.longitude))
    }
}
