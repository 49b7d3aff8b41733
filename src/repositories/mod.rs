//! In-memory contact storage.
//!
//! The [`AddressBook`] owns every [`Record`](crate::models::Record) for the
//! lifetime of the process. Lookups are linear scans over an insertion-ordered
//! list, which keeps listing order stable and is plenty for a personal
//! address book.

mod address_book;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_HORIZON_DAYS};
