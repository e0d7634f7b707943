//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: phone numbers and birthdays. These value objects validate at
//! construction time, so an invalid phone or date can never be stored in a
//! record.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
