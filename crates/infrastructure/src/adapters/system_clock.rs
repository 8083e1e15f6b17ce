//! Local wall clock

use application::ports::ClockPort;
use chrono::{Local, NaiveDateTime};

/// Reads the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_close_to_local_time() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        assert!(now >= before);
        assert!((now - before).num_seconds() < 5);
    }
}
