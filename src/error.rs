//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every command failure is one of three kinds: a malformed field
//! ([`ValidationError`]), a missing contact/phone/birthday ([`NotFoundError`]) or
//! a malformed command line ([`ArgumentError`]). Their `Display` output is the
//! message shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Something the command refers to does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No contact stored under this name
    #[error("Contact not found.")]
    Contact(String),

    /// The contact exists but does not hold this number
    #[error("Phone {phone} not found for {contact}.")]
    Phone { contact: String, phone: String },

    /// The contact exists but has no birthday set
    #[error("No birthday set for {0}.")]
    Birthday(String),

    /// The contact exists but has no phone numbers
    #[error("No phone numbers saved for {0}.")]
    NoPhones(String),
}

/// The command line itself is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Wrong number of arguments for a known command
    #[error("Give me the right arguments, please. Usage: {usage}")]
    WrongCount {
        command: &'static str,
        usage: &'static str,
    },

    /// Keyword does not name any command
    #[error("Invalid command.")]
    UnknownCommand(String),
}

/// Any error a command can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
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

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
