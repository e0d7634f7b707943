//! Weekly birthday calendar.
//!
//! Works out when a contact should be congratulated: the next anniversary of
//! the birthday, moved to Monday when it lands on a weekend.

use crate::domain::Birthday;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Number of days (starting today) covered by the `birthdays` report.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Widest supported report window; the report is keyed by weekday name.
pub const MAX_WINDOW_DAYS: u32 = 7;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday ("Monday", "Tuesday", ...).
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The next anniversary of `birthday` on or after `today`.
pub fn next_anniversary(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        birthday.anniversary_in(today.year() + 1)
    }
}

/// Days from `today` until the contact should be congratulated.
///
/// Anniversaries on Saturday or Sunday are moved forward to the following
/// Monday.
pub fn days_until_greeting(birthday: &Birthday, today: NaiveDate) -> Option<i64> {
    let anniversary = next_anniversary(birthday, today)?;
    let mut days = (anniversary - today).num_days();

    let weekday_index = i64::from(anniversary.weekday().num_days_from_monday());
    if weekday_index >= 5 {
        days += 7 - weekday_index;
    }

    Some(days)
}

/// The weekday that lies `days` days after `today`.
pub fn weekday_after(today: NaiveDate, days: i64) -> Weekday {
    let today_index = i64::from(today.weekday().num_days_from_monday());
    WEEKDAYS[(today_index + days).rem_euclid(7) as usize]
}

/// Contacts to congratulate, grouped by weekday.
///
/// Weekdays keep the order in which their first contact was added; names
/// keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayReport {
    days: Vec<(Weekday, Vec<String>)>,
}

impl BirthdayReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` under `weekday`.
    pub fn push(&mut self, weekday: Weekday, name: impl Into<String>) {
        let name = name.into();
        match self.days.iter_mut().find(|(day, _)| *day == weekday) {
            Some((_, names)) => names.push(name),
            None => self.days.push((weekday, vec![name])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Names to congratulate on `weekday`, if any.
    pub fn names_on(&self, weekday: Weekday) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(day, _)| *day == weekday)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.days.iter().map(|(day, names)| (*day, names.as_slice()))
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (day, names)) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", weekday_name(*day), names.join(", "))?;
        }
        Ok(())
    }
}
