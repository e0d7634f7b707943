//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// The only accepted textual birthday layout (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's `%Y` also takes short and signed years; the year must be 4 digits.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$")
        .expect("birthday pattern is a valid regex")
});

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY` and rendered back in the same layout.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the layout (including a year of anything but four digits) or names a
    /// date that does not exist.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// The stored date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
