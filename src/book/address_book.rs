//! In-memory address book keyed by contact name.

use super::birthdays::{
    days_until_greeting, weekday_after, BirthdayReport, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::trace;

/// Name-keyed collection of contact records.
///
/// Iteration follows insertion order. Lookups never fail: a missing name is
/// reported as `None`.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced in place; callers
    /// that must not overwrite check [`AddressBook::contains`] first.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the record called `name`, if there is one.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|existing| existing != name);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Contacts to congratulate during the week starting `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> BirthdayReport {
        self.birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts to congratulate within `window_days` days starting `today`.
    ///
    /// Weekend birthdays are greeted on the following Monday; a contact is
    /// listed only if that greeting day is inside the window. The window is
    /// clamped to `1..=MAX_WINDOW_DAYS`.
    pub fn birthdays_within(&self, today: NaiveDate, window_days: u32) -> BirthdayReport {
        let window_days = window_days.clamp(1, MAX_WINDOW_DAYS);
        let mut report = BirthdayReport::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(days) = days_until_greeting(birthday, today) else {
                continue;
            };

            trace!(name = %record.name(), days, "Computed days until greeting");

            if days < i64::from(window_days) {
                report.push(weekday_after(today, days), record.name());
            }
        }

        report
    }
}
