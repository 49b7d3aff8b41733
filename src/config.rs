//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present. Nothing here
//! writes to stdout, which carries the conversation with the user.

use crate::domain::BirthdayFormat;
use crate::error::{ConfigError, ConfigResult};
use crate::matching::NameMatcher;
use crate::repositories::DEFAULT_BIRTHDAY_HORIZON_DAYS;
use std::env;

/// Longest birthday look-ahead accepted, in days.
const MAX_BIRTHDAY_HORIZON_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text format birthdays are entered and shown in (default: DD.MM.YYYY)
    pub birthday_format: BirthdayFormat,

    /// How many days ahead `birthdays` looks (default: 7)
    pub birthday_horizon_days: u32,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Minimum fuzzy-match confidence for "did you mean" hints (0-100, default: 50)
    pub suggestion_threshold: u8,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `BIRTHDAY_FORMAT`: `dmy` (DD.MM.YYYY) or `iso` (YYYY-MM-DD), default `dmy`
    /// - `BIRTHDAY_HORIZON_DAYS`: upcoming-birthday window, 0-366, default 7
    /// - `ASSISTANT_PROMPT`: input prompt, default "Enter a command: "
    /// - `SUGGESTION_THRESHOLD`: min confidence for hints, 0-100, default 50
    /// - `LOG_LEVEL`: logging level, default "error"
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let birthday_format = match env::var("BIRTHDAY_FORMAT") {
            Ok(val) => val
                .parse::<BirthdayFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTHDAY_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.birthday_format,
        };

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", defaults.birthday_horizon_days)?;
        if birthday_horizon_days > MAX_BIRTHDAY_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_HORIZON_DAYS),
            });
        }

        let suggestion_threshold =
            Self::parse_env_u8("SUGGESTION_THRESHOLD", defaults.suggestion_threshold)?;
        if suggestion_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SUGGESTION_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            birthday_format,
            birthday_horizon_days,
            prompt,
            suggestion_threshold,
            log_level,
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

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_format: BirthdayFormat::default(),
            birthday_horizon_days: DEFAULT_BIRTHDAY_HORIZON_DAYS,
            prompt: "Enter a command: ".to_string(),
            suggestion_threshold: NameMatcher::DEFAULT_MIN_CONFIDENCE,
            log_level: "error".to_string(),
        }
    }
}
