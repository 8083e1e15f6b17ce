//! Wall clock port

use chrono::NaiveDateTime;
#[cfg(test)]
use mockall::automock;

/// Source of the local wall-clock time
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}
