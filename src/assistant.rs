//! Command dispatcher.
//!
//! The [`Assistant`] owns the address book and turns one command line into
//! one [`Outcome`]. Every failure becomes a reply; nothing a user types can
//! stop the assistant except `close` or `exit`.

use crate::book::{AddressBook, Clock, SystemClock, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::commands::handlers::{self, FAREWELL};
use crate::commands::{parse_input, Command};
use crate::config::Config;
use crate::error::CommandResult;
use tracing::{debug, trace};

/// Result of handling one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep reading commands
    Reply(String),
    /// Print the farewell and stop
    Exit(String),
}

impl Outcome {
    /// Text to print for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(text) | Outcome::Exit(text) => text.as_str(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// The assistant bot: an address book plus the commands that act on it.
#[derive(Debug)]
pub struct Assistant<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
    birthday_window_days: u32,
}

impl Assistant<SystemClock> {
    /// Create an assistant with an empty address book and the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an assistant using the settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_birthday_window(config.birthday_window_days)
    }
}

impl Default for Assistant<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Assistant<C> {
    /// Create an assistant that asks `clock` for today's date.
    pub fn with_clock(clock: C) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Change how many days the `birthdays` command looks ahead.
    ///
    /// `days` is clamped to `1..=MAX_WINDOW_DAYS`.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days.clamp(1, MAX_WINDOW_DAYS);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one command line.
    pub fn handle(&mut self, line: &str) -> Outcome {
        trace!(line = %line, "Handling command line");

        match self.dispatch(line) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(line = %line, error = ?e, "Command failed");
                Outcome::Reply(e.to_string())
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> CommandResult<Outcome> {
        let input = parse_input(line)?;
        let args = input.args.as_slice();

        let reply = match input.command {
            Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add_contact(args, &mut self.book)?,
            Command::Change => handlers::change_contact(args, &mut self.book)?,
            Command::Phone => handlers::show_phone(args, &self.book)?,
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday => handlers::add_birthday(args, &mut self.book)?,
            Command::ShowBirthday => handlers::show_birthday(args, &self.book)?,
            Command::Birthdays => handlers::birthdays(
                &self.book,
                self.clock.today(),
                self.birthday_window_days,
            ),
        };

        Ok(Outcome::Reply(reply))
    }
}
