//! Interactive session loop.
//!
//! A thin I/O adapter: reads lines, hands them to the [`Dispatcher`] and
//! writes back whatever it replies. Generic over the reader and writer so a
//! whole session can be driven from memory in tests.

use crate::commands::{Dispatcher, Reply};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info, warn};

/// Greeting printed once at the start of a session.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Reply given when a command fails in a way no error type covers.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Run a session until `close`/`exit` or end of input.
///
/// Input is read as raw bytes; a line that is not valid UTF-8 is decoded
/// lossily and answered like any other line.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Command
/// failures are replies, not errors.
pub fn run_session<R, W>(
    dispatcher: &mut Dispatcher,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut buffer = Vec::new();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buffer.clear();
        let read = input
            .read_until(b'\n', &mut buffer)
            .context("Failed to read input line")?;
        if read == 0 {
            writeln!(output)?;
            info!("Input closed, ending session");
            break;
        }

        let line = decode_line(&buffer);
        let Some(reply) = guarded(&line, || dispatcher.handle_line(&line)) else {
            continue;
        };

        writeln!(output, "{}", reply.text)?;
        if reply.exit {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

/// Decode one raw input line without its line terminator.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!("Input line is not valid UTF-8, decoded lossily");
    }

    match line {
        Cow::Borrowed(text) => Cow::Borrowed(text.trim_end_matches(['\n', '\r'])),
        Cow::Owned(text) => Cow::Owned(text.trim_end_matches(['\n', '\r']).to_string()),
    }
}

/// Run `handle` for one line; a panic inside it is reported, not propagated.
fn guarded<F>(line: &str, handle: F) -> Option<Reply>
where
    F: FnOnce() -> Option<Reply>,
{
    match panic::catch_unwind(AssertUnwindSafe(handle)) {
        Ok(reply) => reply,
        Err(_) => {
            error!(line = %line, "Command panicked");
            Some(Reply::message(UNEXPECTED_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut dispatcher = Dispatcher::default();
        let mut output = Vec::new();
        run_session(&mut dispatcher, Cursor::new(input), &mut output, "> ").unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_until_exit() {
        let output = run("hello\nadd alice 1234567890\nexit\nhello\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             > How can I help you?\n\
             > Contact added.\n\
             > Good bye!\n"
        );
    }

    #[test]
    fn test_session_ends_on_eof() {
        let output = run("hello");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n> How can I help you?\n> \n"
        );
    }

    #[test]
    fn test_guarded_reports_panic() {
        let reply = guarded("boom", || panic!("command blew up"));
        assert_eq!(reply, Some(Reply::message(UNEXPECTED_ERROR)));
    }

    #[test]
    fn test_guarded_keeps_handling_after_panic() {
        let mut dispatcher = Dispatcher::default();
        let replies: Vec<Option<Reply>> = ["boom", "add alice 1234567890"]
            .into_iter()
            .map(|line| {
                if line == "boom" {
                    guarded(line, || panic!("command blew up"))
                } else {
                    guarded(line, || dispatcher.handle_line(line))
                }
            })
            .collect();

        assert_eq!(
            replies,
            vec![
                Some(Reply::message(UNEXPECTED_ERROR)),
                Some(Reply::message("Contact added.")),
            ]
        );
        assert_eq!(dispatcher.book().len(), 1);
    }

    #[test]
    fn test_guarded_passes_replies_through() {
        assert_eq!(guarded("", || None), None);
        assert_eq!(
            guarded("hello", || Some(Reply::message("hi"))),
            Some(Reply::message("hi"))
        );
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"hello\r\n"), "hello");
        assert_eq!(decode_line(b"show \xff\n"), "show \u{FFFD}");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut dispatcher = Dispatcher::default();
        let mut output = Vec::new();
        let input: &[u8] = b"show \xff\xfe\nhello\n";
        run_session(&mut dispatcher, input, &mut output, "> ").unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Welcome to the assistant bot!\n> Contact not found.\n> How can I help you?\n> \n"
        );
    }

    #[test]
    fn test_blank_lines_only_reprompt() {
        let output = run("\n   \nclose\n");
        assert_eq!(output, "Welcome to the assistant bot!\n> > > Good bye!\n");
    }
}
