//! Command parsing and dispatch.
//!
//! [`Command`] is the typed form of one input line; [`Dispatcher`] runs it
//! against the address book and produces the [`Reply`] text.

pub mod command;
pub mod dispatcher;

pub use command::{Command, CommandSpec, COMMANDS};
pub use dispatcher::{Dispatcher, ReferenceDate, Reply};
