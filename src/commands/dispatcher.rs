//! Command execution against the address book.
//!
//! The [`Dispatcher`] owns the [`AddressBook`] for a session and turns each
//! [`Command`] into a [`Reply`]. It is the single place where failures are
//! translated into user-facing text: no command error escapes `execute`.

use super::command::{Command, COMMANDS};
use crate::config::Config;
use crate::domain::{Birthday, BirthdayFormat, ContactName};
use crate::error::{ArgumentError, AssistantError, AssistantResult, NotFoundError};
use crate::matching::NameMatcher;
use crate::models::Record;
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::{AddressBook, UpcomingBirthday};
use chrono::NaiveDate;
use tracing::{debug, info};

/// The text shown for one command, and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    /// A reply that keeps the session going.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    /// The final reply of a session.
    pub fn farewell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// Which day counts as "today" for the `birthdays` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceDate {
    /// The local calendar date at the moment the command runs
    #[default]
    Today,

    /// A pinned date
    Fixed(NaiveDate),
}

impl ReferenceDate {
    pub fn resolve(self) -> NaiveDate {
        match self {
            ReferenceDate::Today => chrono::Local::now().date_naive(),
            ReferenceDate::Fixed(date) => date,
        }
    }
}

/// Executes commands for one session.
///
/// Owns its address book and metrics; each session gets its own dispatcher.
#[derive(Debug)]
pub struct Dispatcher {
    book: AddressBook,
    birthday_format: BirthdayFormat,
    birthday_horizon_days: u32,
    reference_date: ReferenceDate,
    matcher: NameMatcher,
    metrics: MetricsTracker,
}

impl Dispatcher {
    /// Create a dispatcher with an empty address book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create a dispatcher around an existing address book.
    pub fn with_book(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            birthday_format: config.birthday_format,
            birthday_horizon_days: config.birthday_horizon_days,
            reference_date: ReferenceDate::Today,
            matcher: NameMatcher::new(config.suggestion_threshold),
            metrics: MetricsTracker::new(),
        }
    }

    /// Pin the date `birthdays` measures from.
    pub fn with_reference_date(mut self, reference_date: ReferenceDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Tokenize and run one input line.
    ///
    /// Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match Command::parse_line(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(err) => {
                self.metrics.track_command("unparsed", false);
                Some(Reply::message(self.describe_error(err.into())))
            }
        }
    }

    /// Run a parsed command, converting any failure into its message.
    pub fn execute(&mut self, command: Command) -> Reply {
        let keyword = command.keyword();
        debug!(command = keyword, "Executing command");
        let timer = Timer::new(keyword);

        let result = self.run(command);
        timer.finish_with_status(result.is_ok());
        self.metrics.track_command(keyword, result.is_ok());

        match result {
            Ok(reply) => reply,
            Err(err) => {
                info!(command = keyword, error = %err, "Command failed");
                Reply::message(self.describe_error(err))
            }
        }
    }

    fn run(&mut self, command: Command) -> AssistantResult<Reply> {
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_contact(&name, &old_phone, &new_phone)?,
            Command::Show { name } => self.show_phone(&name)?,
            Command::All => self.show_all(),
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday)?,
            Command::ShowBirthday { name } => self.show_birthday(&name)?,
            Command::Birthdays => self.birthdays(),
            Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone)?,
            Command::Delete { name } => self.delete_contact(&name)?,
            Command::Help => Command::help_text(),
            Command::Exit => return Ok(Reply::farewell("Good bye!")),
        };

        Ok(Reply::message(text))
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> AssistantResult<String> {
        let name = ContactName::new(name)?;

        if let Some(record) = self.book.find_mut(name.as_str()) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, name: &str, old: &str, new: &str) -> AssistantResult<String> {
        self.book.require_mut(name)?.edit_phone(old, new)?;
        Ok("Contact changed.".to_string())
    }

    fn show_phone(&self, name: &str) -> AssistantResult<String> {
        let record = self.book.require(name)?;
        record
            .primary_phone()
            .map(|phone| phone.to_string())
            .ok_or_else(|| NotFoundError::NoPhones(name.to_string()).into())
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts saved.".to_string();
        }

        self.book
            .records()
            .map(|record| record.summary(self.birthday_format))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, raw: &str) -> AssistantResult<String> {
        let format = self.birthday_format;
        self.book.require_mut(name)?.add_birthday(raw, format)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, name: &str) -> AssistantResult<String> {
        let record = self.book.require(name)?;
        let birthday = record
            .birthday()
            .ok_or_else(|| NotFoundError::Birthday(name.to_string()))?;
        Ok(format!(
            "{}'s birthday: {}",
            record.name(),
            birthday.format(self.birthday_format)
        ))
    }

    fn birthdays(&self) -> String {
        let reference = self.reference_date.resolve();
        let upcoming = self
            .book
            .upcoming_birthdays(reference, self.birthday_horizon_days);
        self.metrics.track_birthday_query(upcoming.len());

        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        upcoming
            .iter()
            .map(|entry| self.describe_upcoming(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn describe_upcoming(&self, entry: &UpcomingBirthday) -> String {
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            days => format!("in {} days", days),
        };
        format!(
            "{}: {} ({})",
            entry.name,
            Birthday::from(entry.next_date).format(self.birthday_format),
            when
        )
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> AssistantResult<String> {
        self.book.require_mut(name)?.remove_phone(phone)?;
        Ok("Phone removed.".to_string())
    }

    fn delete_contact(&mut self, name: &str) -> AssistantResult<String> {
        self.book
            .delete(name)
            .ok_or_else(|| NotFoundError::Contact(name.to_string()))?;
        Ok("Contact deleted.".to_string())
    }

    /// User-facing text for a failed command, with a hint where one helps.
    fn describe_error(&self, err: AssistantError) -> String {
        let hint = match &err {
            AssistantError::NotFound(NotFoundError::Contact(name)) => {
                self.matcher.best(name, self.book.names())
            }
            AssistantError::Argument(ArgumentError::UnknownCommand(keyword)) => self
                .matcher
                .best(keyword, COMMANDS.iter().map(|spec| spec.keyword)),
            _ => None,
        };

        match hint {
            Some(suggestion) => format!("{} Did you mean '{}'?", err, suggestion.candidate),
            None => err.to_string(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
