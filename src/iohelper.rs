/**
 * Helper functions and macros for console input and output.
 */
use std::io::Write;

use rustyline::error::ReadlineError;

use super::common::{QuizError, Result};

#[macro_export]
macro_rules! my_println {
    ($($arg:tt)*) => (
        writeln!(std::io::stdout(), $($arg)*).map_err($crate::common::QuizError::Io)
    );
}

#[macro_export]
macro_rules! my_print {
    ($($arg:tt)*) => (
        write!(std::io::stdout(), $($arg)*).map_err($crate::common::QuizError::Io)
    );
}

/// Display a prompt and read lines from standard input until the user enters
/// one with at least one non-whitespace character. Returns `Ok(None)` on
/// Ctrl+D and `Err(QuizError::ReadlineInterrupted)` on Ctrl+C; otherwise the
/// trimmed line is returned.
pub fn prompt(message: &str) -> Result<Option<String>> {
    let mut rl = rustyline::Editor::<()>::new();
    loop {
        match rl.readline(message) {
            Ok(response) => {
                let response = response.trim();
                if !response.is_empty() {
                    return Ok(Some(response.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                return Err(QuizError::ReadlineInterrupted);
            }
            Err(ReadlineError::Eof) => {
                return Ok(None);
            }
            _ => {}
        }
    }
}

/// Like `prompt`, but accepts an empty line. Used for "press ENTER to
/// continue" pauses, where any input at all should resume the quiz.
pub fn wait_for_enter(message: &str) -> Result<()> {
    let mut rl = rustyline::Editor::<()>::new();
    match rl.readline(message) {
        Err(ReadlineError::Interrupted) => Err(QuizError::ReadlineInterrupted),
        _ => Ok(()),
    }
}

/// Print `message` to standard output, breaking lines according to the width
/// of the terminal. The first line starts with `prefix`; subsequent lines are
/// indented by its length.
pub fn prettyprint(message: &str, prefix: &str) -> Result<()> {
    let width = ::std::cmp::max(textwrap::termwidth().saturating_sub(prefix.len()), 20);
    let indent = " ".repeat(prefix.len());
    for (i, line) in textwrap::wrap_iter(message, width).enumerate() {
        if i == 0 {
            my_println!("{}{}", prefix, line)?;
        } else {
            my_println!("{}{}", indent, line)?;
        }
    }
    Ok(())
}
