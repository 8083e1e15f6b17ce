//! Temporal heuristics
//!
//! Hour-of-day and calendar-offset phrasing. Everything here is pure except
//! for the random phrase choice, which goes through [`PhraseChooser`] so
//! callers can pin it.

use std::fmt;

use chrono::Weekday;
use domain::value_objects::{DayLabel, WEEK, weekday_after, weekday_index, weekday_name};
use domain::DomainError;
use rand::seq::IndexedRandom;

/// First hour of the morning
pub const DAWN: u32 = 5;
/// First hour of the afternoon
pub const NOON: u32 = 12;
/// First hour of the evening
pub const DUSK: u32 = 17;
/// First hour of the night
pub const DARK: u32 = 21;

/// Picks one phrase out of several equally valid ones
pub trait PhraseChooser: Send + Sync + fmt::Debug {
    /// Pick one of `options`; `options` is never empty
    fn choose<'a>(&self, options: &[&'a str]) -> &'a str;
}

/// Uniformly random choice using the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChooser;

impl PhraseChooser for RandomChooser {
    fn choose<'a>(&self, options: &[&'a str]) -> &'a str {
        options.choose(&mut rand::rng()).copied().unwrap_or_default()
    }
}

/// Always picks the option at a fixed position
///
/// An index past the end picks the last option.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser {
    index: usize,
}

impl FixedChooser {
    /// Choose the option at `index`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Always choose the first option
    #[must_use]
    pub const fn first() -> Self {
        Self::new(0)
    }

    /// Always choose the last option
    #[must_use]
    pub const fn last() -> Self {
        Self::new(usize::MAX)
    }
}

impl PhraseChooser for FixedChooser {
    fn choose<'a>(&self, options: &[&'a str]) -> &'a str {
        options
            .get(self.index)
            .or_else(|| options.last())
            .copied()
            .unwrap_or_default()
    }
}

/// Part of the day for an hour in `0..24`
///
/// Morning and afternoon hours randomly read as "day" as well.
pub fn part_of_day(hour: u32, chooser: &dyn PhraseChooser) -> &'static str {
    match hour {
        h if (DAWN..NOON).contains(&h) => chooser.choose(&["morning", "day"]),
        h if (NOON..DUSK).contains(&h) => chooser.choose(&["afternoon", "day"]),
        h if (DUSK..DARK).contains(&h) => "evening",
        _ => "night",
    }
}

/// Phrase a day offset relative to `today`
///
/// | days           | label                                        |
/// |----------------|----------------------------------------------|
/// | absent or 0    | "today"                                      |
/// | 1              | "tomorrow"                                   |
/// | 2              | "day after tomorrow" or the weekday name     |
/// | 3..=6          | weekday name                                 |
/// | anything else  | the number itself                            |
pub fn resolve_day_label(
    days: Option<i64>,
    today: Weekday,
    chooser: &dyn PhraseChooser,
) -> DayLabel {
    match days {
        None | Some(0) => DayLabel::named("today"),
        Some(1) => DayLabel::named("tomorrow"),
        Some(2) => DayLabel::named(chooser.choose(&["day after tomorrow", weekday_after(today, 2)])),
        Some(offset @ 3..=6) => {
            let offset = u32::try_from(offset).unwrap_or_default();
            DayLabel::named(weekday_after(today, offset))
        },
        Some(other) => DayLabel::Count(other),
    }
}

/// Index of `day_name` in a cyclic window of the week starting at `today`
///
/// The window starts at today's Monday-first index and is
/// `today_index + day_index` days long. With `next_week` the index of the
/// window's last day is returned instead, which is `-1` for an empty
/// window.
///
/// # Errors
///
/// `WeekdayNotRecognized` for an unknown name, `WeekdayOutsideWindow` when
/// the day does not fall inside the window.
pub fn resolve_weekday_index(
    day_name: &str,
    today: Weekday,
    next_week: bool,
) -> Result<i64, DomainError> {
    let day_index = weekday_index(day_name)?;
    let today_index = today.num_days_from_monday() as usize;

    let window: Vec<&str> = WEEK
        .iter()
        .cycle()
        .skip(today_index)
        .take(today_index + day_index)
        .copied()
        .collect();

    if next_week {
        return Ok(i64::try_from(window.len()).unwrap_or(i64::MAX) - 1);
    }

    let day = WEEK[day_index];
    window
        .iter()
        .position(|candidate| *candidate == day)
        .map(|position| i64::try_from(position).unwrap_or(i64::MAX))
        .ok_or_else(|| DomainError::weekday_outside_window(day, weekday_name(today)))
}
