//! Address Book Bot - an interactive command-line assistant for contacts.
//!
//! The assistant keeps names, phone numbers and birthdays in memory and
//! answers line-based commands such as `add`, `phone`, `add-birthday` and
//! `birthdays`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: The contact record
//! - **book**: The address book and the weekly birthday calendar
//! - **commands**: Command parsing and per-command handlers
//! - **assistant**: Dispatcher that turns a command line into a reply
//! - **repl**: The interactive read-evaluate-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use assistant::{Assistant, Outcome};
pub use book::{AddressBook, BirthdayReport, Clock, FixedClock, SystemClock};
pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::Record;
