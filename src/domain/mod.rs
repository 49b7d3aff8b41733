//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers and birthday. Each value object validates at
//! construction time so an invalid field can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayFormat};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
