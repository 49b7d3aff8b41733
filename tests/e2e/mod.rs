//! Shared helpers for end-to-end assistant tests.
//!
//! Every test drives a fresh [`Dispatcher`] with a pinned reference date so
//! birthday windows are deterministic.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::repl::run_session;
use contact_assistant::{Config, Dispatcher, ReferenceDate};
use std::io::Cursor;

pub mod fixtures;

/// Reference date used by every session in these tests (a Monday).
pub fn reference_date() -> NaiveDate {
    ymd(2026, 5, 18)
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Dispatcher with default configuration and the pinned reference date.
pub fn setup_dispatcher() -> Dispatcher {
    setup_dispatcher_with(&Config::default())
}

pub fn setup_dispatcher_with(config: &Config) -> Dispatcher {
    Dispatcher::new(config).with_reference_date(ReferenceDate::Fixed(reference_date()))
}

/// Send one line and return the reply text.
///
/// # Panics
/// Panics if the line is blank, since blank lines produce no reply.
pub fn say(dispatcher: &mut Dispatcher, line: &str) -> String {
    dispatcher
        .handle_line(line)
        .unwrap_or_else(|| panic!("no reply for line {:?}", line))
        .text
}

/// Send several lines, discarding the replies.
pub fn feed(dispatcher: &mut Dispatcher, lines: &[&str]) {
    for line in lines {
        say(dispatcher, line);
    }
}

/// Run a complete session over `input` and return everything written.
pub fn run_transcript(dispatcher: &mut Dispatcher, input: &str, prompt: &str) -> String {
    let mut output = Vec::new();
    run_session(dispatcher, Cursor::new(input), &mut output, prompt)
        .expect("in-memory session should not fail");
    String::from_utf8(output).expect("session output is UTF-8")
}
