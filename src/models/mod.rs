//! Data models for the address book.
//!
//! A [`Record`] is one contact: a name, its phone numbers and an optional
//! birthday. Records are owned by the address book.

pub mod record;

pub use record::Record;
