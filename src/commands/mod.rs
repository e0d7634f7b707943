//! Command parsing.
//!
//! A command line is a command word followed by whitespace-separated
//! positional arguments. The command word is matched case-insensitively;
//! arguments are kept exactly as typed.

pub mod handlers;

use crate::error::{CommandError, CommandResult};
use std::fmt;
use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// The canonical command word.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CommandError::InvalidCommand),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command line split into its command and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub command: Command,
    pub args: Vec<&'a str>,
}

/// Split `line` on whitespace and resolve the command word.
///
/// # Errors
///
/// Returns `CommandError::InvalidCommand` for a blank line or an unknown
/// command word.
pub fn parse_input(line: &str) -> CommandResult<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = tokens
        .next()
        .ok_or(CommandError::InvalidCommand)?
        .parse::<Command>()?;

    Ok(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
