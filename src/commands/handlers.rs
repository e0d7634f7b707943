//! Command handlers.
//!
//! Each handler takes the positional arguments of one command line and the
//! address book, and returns either the reply text or the `CommandError`
//! whose `Display` is the reply.

use crate::book::AddressBook;
use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays in the next week.";

/// `hello`
pub fn hello() -> String {
    GREETING.to_string()
}

/// `add <name> <phone>`: create a contact with one phone number.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::NameAndPhoneRequired);
    };

    if book.contains(name) {
        return Err(CommandError::DuplicateContact);
    }

    let mut record = Record::new(*name);
    record.add_phone(phone).map_err(|e| {
        debug!(name = %name, error = %e, "Rejected phone for new contact");
        CommandError::NameAndPhoneRequired
    })?;
    book.add_record(record);

    Ok("Contact added.".to_string())
}

/// `change <name> <new phone>`: replace the contact's first phone.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, new_phone] = args else {
        return Err(CommandError::NameAndPhoneRequired);
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;

    let result = match record.first_phone().map(|phone| phone.as_str().to_string()) {
        Some(old_phone) => record.edit_phone(&old_phone, new_phone),
        None => record.add_phone(new_phone),
    };
    result.map_err(|e| {
        debug!(name = %name, error = %e, "Rejected phone change");
        CommandError::NameAndPhoneRequired
    })?;

    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show the contact's first phone.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::NameRequired)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    record
        .first_phone()
        .map(|phone| phone.to_string())
        .ok_or_else(|| CommandError::NoPhoneNumbers(record.name().to_string()))
}

/// `all`: one `name: first phone` line per contact.
pub fn show_all(book: &AddressBook) -> String {
    book.iter()
        .map(|record| match record.first_phone() {
            Some(phone) => format!("{}: {}", record.name(), phone),
            None => format!("{}: None", record.name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(CommandError::NameAndBirthdayRequired);
    };

    let birthday = Birthday::parse(date).map_err(|e| {
        debug!(error = %e, "Rejected birthday");
        CommandError::InvalidDateFormat
    })?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NamedContactNotFound(name.to_string()))?;
    record.replace_birthday(birthday);

    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::NameRequired)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday is on {}.", name, birthday),
        None => format!("{} has no birthday set.", name),
    })
}

/// `birthdays`: who to congratulate in the `window_days` days from `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    let report = book.birthdays_within(today, window_days);
    if report.is_empty() {
        NO_UPCOMING_BIRTHDAYS.to_string()
    } else {
        report.to_string()
    }
}
