//! Time sources for the engine.
//!
//! All date and timer arithmetic goes through the [`Clock`] trait so that
//! day rollover and focus-session timing can be driven by a virtual clock
//! in tests. Elapsed time is always a pure query against
//! `(clock, start_timestamp)` -- nothing in the engine ticks on its own.

use std::cell::Cell;

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Adjustable clock for tests and simulations.
///
/// Interior mutability lets callers advance time while the engine owns
/// the clock.
#[derive(Debug, Default)]
pub struct FixedClock {
    epoch_ms: Cell<i64>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            epoch_ms: Cell::new(now.timestamp_millis()),
        }
    }

    /// Midnight (UTC) on the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::at(date.and_hms_opt(0, 0, 0).expect("valid midnight").and_utc())
    }

    pub fn advance_secs(&self, secs: i64) {
        self.epoch_ms.set(self.epoch_ms.get() + secs * 1000);
    }

    pub fn advance_days(&self, days: i64) {
        self.advance_secs(days * 24 * 60 * 60);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.epoch_ms.set(now.timestamp_millis());
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.epoch_ms.get()).expect("in-range timestamp")
    }
}
