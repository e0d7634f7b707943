//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits with no formatting characters.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`PhoneNumber::new`].
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("12345abcde").is_err());
        assert!(PhoneNumber::new("+380501234").is_err());
        assert!(PhoneNumber::new("050 123 45").is_err());
        assert!(PhoneNumber::new("1234567890").is_ok());
    }

    #[test]
    fn test_phone_rejects_trailing_newline() {
        assert!(PhoneNumber::new("1234567890\n").is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not accepted.
        assert!(PhoneNumber::new("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = PhoneNumber::new("12").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12".to_string()));
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("0501234567").unwrap();
        assert_eq!(format!("{}", phone), "0501234567");
        assert_eq!(phone.into_inner(), "0501234567");
    }
}
