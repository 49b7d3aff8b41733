//! Command parsing.
//!
//! Turns a keyword plus whitespace-separated arguments into a typed
//! [`Command`], checking the argument count against the command table.

use crate::error::ArgumentError;

/// Static description of one command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Keyword as typed by the user (lowercase)
    pub keyword: &'static str,

    /// Exact number of arguments the command takes
    pub arity: usize,

    /// Usage line shown on wrong argument count
    pub usage: &'static str,

    /// One-line description for `help`
    pub description: &'static str,
}

/// Every keyword the assistant understands, in `help` order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        keyword: "hello",
        arity: 0,
        usage: "hello",
        description: "Greet the assistant",
    },
    CommandSpec {
        keyword: "add",
        arity: 2,
        usage: "add <name> <phone>",
        description: "Add a contact, or another phone to an existing contact",
    },
    CommandSpec {
        keyword: "change",
        arity: 3,
        usage: "change <name> <phone> <new_phone>",
        description: "Replace one of a contact's phones",
    },
    CommandSpec {
        keyword: "show",
        arity: 1,
        usage: "show <name>",
        description: "Show a contact's primary phone",
    },
    CommandSpec {
        keyword: "all",
        arity: 0,
        usage: "all",
        description: "List every contact",
    },
    CommandSpec {
        keyword: "add-birthday",
        arity: 2,
        usage: "add-birthday <name> <birthday>",
        description: "Set a contact's birthday",
    },
    CommandSpec {
        keyword: "show-birthday",
        arity: 1,
        usage: "show-birthday <name>",
        description: "Show a contact's birthday",
    },
    CommandSpec {
        keyword: "birthdays",
        arity: 0,
        usage: "birthdays",
        description: "List birthdays coming up soon",
    },
    CommandSpec {
        keyword: "remove-phone",
        arity: 2,
        usage: "remove-phone <name> <phone>",
        description: "Remove one of a contact's phones",
    },
    CommandSpec {
        keyword: "delete",
        arity: 1,
        usage: "delete <name>",
        description: "Delete a contact",
    },
    CommandSpec {
        keyword: "help",
        arity: 0,
        usage: "help",
        description: "Show this list",
    },
    CommandSpec {
        keyword: "close",
        arity: 0,
        usage: "close",
        description: "Leave the assistant",
    },
    CommandSpec {
        keyword: "exit",
        arity: 0,
        usage: "exit",
        description: "Leave the assistant",
    },
];

/// A parsed command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Show {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    Help,
    Exit,
}

impl Command {
    /// Parse a keyword (case-insensitive) and its arguments.
    ///
    /// # Errors
    ///
    /// - `ArgumentError::UnknownCommand` if the keyword is not in [`COMMANDS`]
    /// - `ArgumentError::WrongCount` if the argument count does not match
    pub fn parse<S: AsRef<str>>(keyword: &str, args: &[S]) -> Result<Self, ArgumentError> {
        let keyword = keyword.trim().to_lowercase();
        let spec = Self::spec(&keyword)
            .ok_or_else(|| ArgumentError::UnknownCommand(keyword.clone()))?;

        if args.len() != spec.arity {
            return Err(ArgumentError::WrongCount {
                command: spec.keyword,
                usage: spec.usage,
            });
        }

        let arg = |index: usize| args[index].as_ref().to_string();

        let command = match spec.keyword {
            "hello" => Command::Hello,
            "add" => Command::Add {
                name: arg(0),
                phone: arg(1),
            },
            "change" => Command::Change {
                name: arg(0),
                old_phone: arg(1),
                new_phone: arg(2),
            },
            "show" => Command::Show { name: arg(0) },
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday {
                name: arg(0),
                birthday: arg(1),
            },
            "show-birthday" => Command::ShowBirthday { name: arg(0) },
            "birthdays" => Command::Birthdays,
            "remove-phone" => Command::RemovePhone {
                name: arg(0),
                phone: arg(1),
            },
            "delete" => Command::Delete { name: arg(0) },
            "help" => Command::Help,
            _ => Command::Exit,
        };

        Ok(command)
    }

    /// Split a raw input line on whitespace and parse it.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ArgumentError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();
        Self::parse(keyword, &args[..]).map(Some)
    }

    /// Look up the table entry for a lowercase keyword.
    pub fn spec(keyword: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|spec| spec.keyword == keyword)
    }

    /// The keyword this command was parsed from (`exit` for both exit aliases).
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add { .. } => "add",
            Command::Change { .. } => "change",
            Command::Show { .. } => "show",
            Command::All => "all",
            Command::AddBirthday { .. } => "add-birthday",
            Command::ShowBirthday { .. } => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::RemovePhone { .. } => "remove-phone",
            Command::Delete { .. } => "delete",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Multi-line usage listing for the `help` command.
    pub fn help_text() -> String {
        let width = COMMANDS
            .iter()
            .map(|spec| spec.usage.len())
            .max()
            .unwrap_or(0);

        COMMANDS
            .iter()
            .map(|spec| format!("{:width$}  {}", spec.usage, spec.description, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
