//! Record model representing one contact in the address book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use std::fmt;

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// The name is the address book key and is stored exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Contact name (case-sensitive key)
    name: String,

    /// Phone numbers in the order they were added; duplicates are allowed
    phones: Vec<PhoneNumber>,

    /// Birthday, if one has been set
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The first phone added, used as the contact's primary number.
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    pub fn add_phone(&mut self, number: &str) -> RecordResult<()> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    pub fn remove_phone(&mut self, number: &str) -> RecordResult<PhoneNumber> {
        let index = self.position_of(number)?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything is looked up, so a failed edit
    /// never leaves the record modified.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let index = self.position_of(old)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Look up the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> RecordResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == number)
            .ok_or_else(|| RecordError::PhoneNotFound(number.to_string()))
    }

    /// Parse `text` as `DD.MM.YYYY` and store it, replacing any prior birthday.
    pub fn set_birthday(&mut self, text: &str) -> RecordResult<()> {
        self.replace_birthday(Birthday::parse(text)?);
        Ok(())
    }

    /// Store an already parsed birthday, replacing any prior one.
    pub fn replace_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    fn position_of(&self, number: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == number)
            .ok_or_else(|| RecordError::PhoneNotFound(number.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}
