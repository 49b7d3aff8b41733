//! Record model representing one contact in the address book.

use crate::domain::{Birthday, BirthdayFormat, ContactName, PhoneNumber, ValidationError};
use crate::error::{AssistantError, AssistantResult, NotFoundError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, zero or more phone numbers and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order, the first one
/// being the primary number. A number can be stored only once per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The first phone added to this record.
    pub fn primary_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidPhone` if `raw` is not ten digits
    /// - `ValidationError::DuplicatePhone` if the record already holds it
    pub fn add_phone(&mut self, raw: &str) -> AssistantResult<&PhoneNumber> {
        let phone = PhoneNumber::new(raw)?;
        if self.position_of(raw).is_some() {
            return Err(ValidationError::DuplicatePhone(phone.into_inner()).into());
        }
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// First stored phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Remove the first stored phone equal to `raw` and return it.
    pub fn remove_phone(&mut self, raw: &str) -> AssistantResult<PhoneNumber> {
        let index = self.require_position(raw)?;
        Ok(self.phones.remove(index))
    }

    /// Replace the phone `old` with `new`, keeping its position in the list.
    ///
    /// Nothing changes unless both the lookup and the validation succeed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AssistantResult<()> {
        let index = self.require_position(old)?;
        let phone = PhoneNumber::new(new)?;

        if let Some(existing) = self.position_of(new) {
            if existing != index {
                return Err(ValidationError::DuplicatePhone(phone.into_inner()).into());
            }
        }

        self.phones[index] = phone;
        Ok(())
    }

    /// Set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Parse `raw` in `format` and store it as the birthday.
    pub fn add_birthday(&mut self, raw: &str, format: BirthdayFormat) -> AssistantResult<&Birthday> {
        let birthday = Birthday::parse(raw, format)?;
        Ok(&*self.birthday.insert(birthday))
    }

    /// Days from `reference` to the next birthday, if one is set.
    pub fn days_until_birthday(&self, reference: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(reference))
    }

    /// Whether the next birthday falls within `horizon_days` of `reference`
    /// (both ends inclusive).
    pub fn upcoming_within_days(&self, reference: NaiveDate, horizon_days: u32) -> bool {
        self.days_until_birthday(reference)
            .is_some_and(|days| days <= i64::from(horizon_days))
    }

    /// One-line description used by the `all` listing.
    pub fn summary(&self, format: BirthdayFormat) -> String {
        let phones = if self.phones.is_empty() {
            "none".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        let birthday = self
            .birthday
            .map(|birthday| birthday.format(format))
            .unwrap_or_else(|| "not set".to_string());

        format!(
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }

    fn require_position(&self, raw: &str) -> AssistantResult<usize> {
        self.position_of(raw).ok_or_else(|| {
            NotFoundError::Phone {
                contact: self.name.to_string(),
                phone: raw.to_string(),
            }
            .into()
        })
    }
}

/// Serialized form of a [`Record`], checked through `add_phone` on load.
#[derive(Deserialize)]
struct RawRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<String>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RawRecord> for Record {
    type Error = AssistantError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut record = Record::new(raw.name);
        for phone in &raw.phones {
            record.add_phone(phone)?;
        }
        record.birthday = raw.birthday;
        Ok(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(BirthdayFormat::default()))
    }
}
