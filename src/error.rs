//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The referenced phone number is not stored on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors a command handler reports back to the user.
///
/// The `Display` text of each variant is exactly the reply printed to the
/// user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `add` / `change` got the wrong number of arguments or a bad phone
    #[error("Give me name and phone(10 digits) please.")]
    NameAndPhoneRequired,

    /// A command that needs a name was given none
    #[error("Give me name please.")]
    NameRequired,

    /// `add-birthday` got the wrong number of arguments
    #[error("Invalid number of arguments. Provide name and birthday.")]
    NameAndBirthdayRequired,

    /// `add-birthday` got a date that is not `DD.MM.YYYY`
    #[error("Incorrect date format. Should be 'DD.MM.YYYY'.")]
    InvalidDateFormat,

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound,

    /// The named contact does not exist, reported with its name
    #[error("Contact {0} not found.")]
    NamedContactNotFound(String),

    /// The named contact exists but has no phone numbers
    #[error("{0} has no phone numbers.")]
    NoPhoneNumbers(String),

    /// `add` for a name that is already taken
    #[error("Contact with the same name already exists.")]
    DuplicateContact,

    /// Unrecognised command word or empty input
    #[error("Invalid command.")]
    InvalidCommand,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = CommandError::NameAndPhoneRequired;
        assert_eq!(err.to_string(), "Give me name and phone(10 digits) please.");

        let err = CommandError::NamedContactNotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact Bob not found.");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be between 1 and 7".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_record_error_wraps_validation() {
        let err: RecordError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(err.to_string(), "The phone number must have 10 digits: 12");
    }
}
