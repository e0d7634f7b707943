//! Shared helpers for integration tests.
//!
//! Every assistant built here uses a fixed clock so birthday reports are
//! deterministic.

#![allow(dead_code)]

use address_book_bot::{Assistant, FixedClock};
use chrono::NaiveDate;

pub mod fixtures;

/// Build a date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// An assistant whose "today" is `today`.
pub fn assistant_on(today: NaiveDate) -> Assistant<FixedClock> {
    Assistant::with_clock(FixedClock(today))
}

/// Send one line and return the printed reply.
pub fn send(assistant: &mut Assistant<FixedClock>, line: &str) -> String {
    assistant.handle(line).message().to_string()
}

/// Send every line in order, panicking if any reply is not `expected`.
pub fn send_all(assistant: &mut Assistant<FixedClock>, lines: &[(&str, &str)]) {
    for (line, expected) in lines {
        assert_eq!(send(assistant, line), *expected, "reply to {:?}", line);
    }
}
