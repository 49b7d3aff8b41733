//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday does not match the configured date format.
    InvalidBirthday {
        value: String,
        expected: &'static str,
    },

    /// The phone number is already stored on the contact.
    DuplicatePhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {}. Phone must be exactly 10 digits.",
                phone
            ),
            Self::InvalidBirthday { value, expected } => {
                write!(f, "Invalid date format: {}. Use {}.", value, expected)
            }
            Self::DuplicatePhone(phone) => {
                write!(f, "Phone number {} is already saved for this contact.", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
