//! Birthday value object and the textual formats it is entered in.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed textual format birthdays are entered and displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirthdayFormat {
    /// `DD.MM.YYYY`, e.g. `20.05.1990`
    #[default]
    DayMonthYear,

    /// `YYYY-MM-DD`, e.g. `1990-05-20`
    IsoDate,
}

impl BirthdayFormat {
    /// The chrono strftime pattern for this format.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "%d.%m.%Y",
            Self::IsoDate => "%Y-%m-%d",
        }
    }

    /// Human readable hint shown in error messages.
    pub fn hint(self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD.MM.YYYY",
            Self::IsoDate => "YYYY-MM-DD",
        }
    }
}

impl FromStr for BirthdayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dmy" | "dd.mm.yyyy" => Ok(Self::DayMonthYear),
            "iso" | "ymd" | "yyyy-mm-dd" => Ok(Self::IsoDate),
            other => Err(format!("Must be 'dmy' or 'iso', got: {}", other)),
        }
    }
}

impl fmt::Display for BirthdayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

/// A contact's date of birth.
///
/// Stored as a calendar date so it can take part in date arithmetic.
/// Parsing is strict: the text must be exactly what [`Birthday::format`]
/// would produce, so `parse(raw).format() == raw` holds for every accepted
/// input.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::{Birthday, BirthdayFormat};
///
/// let birthday = Birthday::parse("20.05.1990", BirthdayFormat::DayMonthYear).unwrap();
/// assert_eq!(birthday.format(BirthdayFormat::IsoDate), "1990-05-20");
/// assert!(Birthday::parse("1990-05-20", BirthdayFormat::DayMonthYear).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday written in `format`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not a real
    /// calendar date in exactly that format (missing zero padding included).
    pub fn parse(raw: &str, format: BirthdayFormat) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday {
            value: raw.to_string(),
            expected: format.hint(),
        };

        let date = NaiveDate::parse_from_str(raw, format.pattern()).map_err(|_| invalid())?;

        // chrono accepts unpadded fields; only canonical text is allowed
        if date.format(format.pattern()).to_string() != raw {
            return Err(invalid());
        }

        Ok(Self(date))
    }

    /// Render the birthday in `format`.
    pub fn format(&self, format: BirthdayFormat) -> String {
        self.0.format(format.pattern()).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The first anniversary of this birthday falling on or after `reference`.
    ///
    /// A 29 February birthday is celebrated on 1 March in non-leap years.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(reference.year());
        if this_year >= reference {
            this_year
        } else {
            self.anniversary_in(reference.year() + 1)
        }
    }

    /// Whole days from `reference` to the next anniversary. Never negative.
    pub fn days_until(&self, reference: NaiveDate) -> i64 {
        (self.next_occurrence(reference) - reference).num_days()
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, BirthdayFormat::default())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(BirthdayFormat::default()))
    }
}
