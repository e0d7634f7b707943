//! Source of "today" for the birthday report.

use chrono::{Local, NaiveDate};

/// Supplies the current date.
///
/// The assistant asks the clock instead of reading the system time directly,
/// so the weekly report can be computed against any fixed day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
