//! Monday-first cyclic week

use chrono::Weekday;

use crate::errors::DomainError;

/// Lowercase weekday names, Monday first
pub const WEEK: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Lowercase name of a weekday
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEK[day.num_days_from_monday() as usize]
}

/// Name of the weekday `offset` days after `today`, wrapping around the week
#[must_use]
pub fn weekday_after(today: Weekday, offset: u32) -> &'static str {
    let index = (today.num_days_from_monday() + offset % 7) % 7;
    WEEK[index as usize]
}

/// Monday-first index of a lowercase weekday name
///
/// Matching is exact: "Friday" and " friday" are not recognized.
pub fn weekday_index(name: &str) -> Result<usize, DomainError> {
    WEEK.iter()
        .position(|day| *day == name)
        .ok_or_else(|| DomainError::WeekdayNotRecognized(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_chrono_order() {
        assert_eq!(weekday_name(Weekday::Mon), "monday");
        assert_eq!(weekday_name(Weekday::Sun), "sunday");
    }

    #[test]
    fn offset_wraps_around() {
        assert_eq!(weekday_after(Weekday::Sat, 2), "monday");
        assert_eq!(weekday_after(Weekday::Wed, 0), "wednesday");
        assert_eq!(weekday_after(Weekday::Mon, 13), "sunday");
    }

    #[test]
    fn index_lookup() {
        assert_eq!(weekday_index("friday").ok(), Some(4));
        assert_eq!(weekday_index("monday").ok(), Some(0));
        assert!(matches!(
            weekday_index("funday"),
            Err(DomainError::WeekdayNotRecognized(ref s)) if s == "funday"
        ));
    }

    #[test]
    fn index_lookup_is_exact() {
        for name in ["Friday", "FRIDAY", " friday", "friday\n"] {
            assert!(
                matches!(weekday_index(name), Err(DomainError::WeekdayNotRecognized(ref s)) if s == name),
                "{name:?}"
            );
        }
    }
}
