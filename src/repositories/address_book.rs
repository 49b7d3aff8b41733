use crate::domain::{Birthday, ContactName};
use crate::error::{AssistantResult, NotFoundError};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// Default look-ahead window for upcoming birthdays, in days.
pub const DEFAULT_BIRTHDAY_HORIZON_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: ContactName,

    /// The stored date of birth
    pub birthday: Birthday,

    /// Date of the next anniversary on or after the reference date
    pub next_date: NaiveDate,

    /// Days from the reference date to `next_date`
    pub days_until: i64,
}

/// The in-memory store of all records, keyed by contact name.
///
/// Every record is reachable by exactly its own name; inserting a record
/// under a name that is already present replaces the old record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name.
    ///
    /// An existing record with the same name is replaced (last write wins) and
    /// returned; it keeps its position in the listing order.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(contact = %record.name(), "Replacing existing record");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(contact = %record.name(), "Inserting new record");
                self.records.push(record);
                None
            }
        }
    }

    /// Exact lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name().as_str() == name)
    }

    /// Exact lookup by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    /// Like [`find`](Self::find) but fails with `NotFoundError::Contact`.
    pub fn require(&self, name: &str) -> AssistantResult<&Record> {
        self.find(name)
            .ok_or_else(|| NotFoundError::Contact(name.to_string()).into())
    }

    /// Like [`find_mut`](Self::find_mut) but fails with `NotFoundError::Contact`.
    pub fn require_mut(&mut self, name: &str) -> AssistantResult<&mut Record> {
        self.find_mut(name)
            .ok_or_else(|| NotFoundError::Contact(name.to_string()).into())
    }

    /// Remove the record stored under `name`.
    ///
    /// Deleting a name that is not present is a no-op and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        debug!(contact = %name, "Deleting record");
        Some(self.records.remove(index))
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// All contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday is within `horizon_days` of `reference`
    /// (inclusive), in insertion order.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        horizon_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter(|record| record.upcoming_within_days(reference, horizon_days))
            .filter_map(|record| {
                let birthday = *record.birthday()?;
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    birthday,
                    next_date: birthday.next_occurrence(reference),
                    days_until: birthday.days_until(reference),
                })
            })
            .collect();

        debug!(
            reference = %reference,
            horizon_days = horizon_days,
            count = upcoming.len(),
            "Collected upcoming birthdays"
        );

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
