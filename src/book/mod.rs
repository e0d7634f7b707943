//! The address book and its weekly birthday calendar.

pub mod address_book;
pub mod birthdays;
pub mod clock;

pub use address_book::AddressBook;
pub use birthdays::{weekday_name, BirthdayReport, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
