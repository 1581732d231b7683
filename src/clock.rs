//! Time source for new expenses
//!
//! Expense ids, dates and audit timestamps all come from a `Clock`, so tests
//! can pin time.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Provides the current time
pub trait Clock {
    /// Local wall-clock time, used for `Expense::date`
    fn now(&self) -> NaiveDateTime;

    /// The current instant in UTC, used for audit timestamps
    fn now_utc(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch, used for ids
    fn now_millis(&self) -> i64 {
        self.now_utc().timestamp_millis()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant
///
/// The instant is interpreted as UTC for `now_utc` and `now_millis`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock() {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now_millis(), 1_704_067_201_000);
        assert_eq!(clock.now_utc().naive_utc(), instant);
    }
}
