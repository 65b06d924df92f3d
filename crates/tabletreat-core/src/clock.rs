//! # Clock
//!
//! Source of "today" for reservation date checks. The core never reads the
//! system clock itself; the shell supplies a clock backed by the local date.

use chrono::NaiveDate;

/// Provides the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
