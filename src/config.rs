//! Configuration management for the address book assistant.
//!
//! Every setting is optional; the defaults reproduce the standard assistant
//! behavior. Values come from the environment, optionally seeded from a
//! `.env` file.

use crate::book::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt printed before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Days covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `BIRTHDAY_WINDOW_DAYS`: Length of the birthday report window,
    ///   1 to 7 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if !(1..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            prompt,
            birthday_window_days,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}
