//! Contact Assistant - a line-oriented command assistant for an in-memory address book.
//!
//! The assistant reads one command per line, applies it to an address book of
//! contacts (name, phone numbers, optional birthday) and answers with a short
//! message. Nothing is persisted between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: The contact record and its phone/birthday operations
//! - **repositories**: The address book and upcoming-birthday queries
//! - **commands**: Command parsing and execution into replies
//! - **matching**: Fuzzy "did you mean" suggestions
//! - **observability**: Per-session command metrics
//! - **repl**: The interactive read-eval-print loop
//! - **error**: Error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repl;
pub mod repositories;

// Re-export commonly used types
pub use commands::{Command, Dispatcher, ReferenceDate, Reply};
pub use config::Config;
pub use domain::{Birthday, BirthdayFormat, ContactName, PhoneNumber, ValidationError};
pub use error::{
    ArgumentError, AssistantError, AssistantResult, ConfigError, NotFoundError,
};
pub use models::Record;
pub use observability::MetricsTracker;
pub use repositories::{AddressBook, UpcomingBirthday};
