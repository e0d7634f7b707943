//! Reference dates used across the integration tests.

#![allow(dead_code)]

use super::date;
use chrono::NaiveDate;

/// Monday 2026-10-19.
pub fn monday() -> NaiveDate {
    date(2026, 10, 19)
}

/// Wednesday 2026-10-21.
pub fn wednesday() -> NaiveDate {
    date(2026, 10, 21)
}

/// Saturday 2026-10-24.
pub fn saturday() -> NaiveDate {
    date(2026, 10, 24)
}

/// `DD.MM.YYYY` text for `days` days after `from`.
///
/// The birth year is a leap year so a fixture landing on 29 February stays
/// a valid date.
pub fn birthday_in(from: NaiveDate, days: u64) -> String {
    let day = from
        .checked_add_days(chrono::Days::new(days))
        .expect("date in range");
    format!("{}.1992", day.format("%d.%m"))
}
