//! Line-oriented key scripts for the terminal front end.
//!
//! A line is split on whitespace. Each token is one of:
//!
//! - `quit` or `exit`
//! - `del <n>`: delete history row `n` (0 is the most recent)
//! - a named key accepted by [`Input::from_key`] (`Enter`, `Escape`,
//!   `Backspace`, `margin`, `sum-vat`, ...)
//! - otherwise a run of single-character keys, e.g. `12+3=`
//!
//! Characters with no key meaning are skipped.

use crate::core::Input;
use thiserror::Error;

/// One thing a script line asks the front end to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Press(Input),
    Delete(usize),
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScriptError {
    #[error("'del' needs a history row number")]
    MissingIndex,

    #[error("'{0}' is not a history row number")]
    BadIndex(String),
}

/// Parse a script line into actions.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{Command, Input};
/// use shopcalc::script::{parse_line, Action};
///
/// let actions = parse_line("12 Enter vat del 0").unwrap();
/// assert_eq!(
///     actions,
///     vec![
///         Action::Press(Input::Digit(1)),
///         Action::Press(Input::Digit(2)),
///         Action::Press(Input::Commit),
///         Action::Press(Input::Command(Command::ApplyVat)),
///         Action::Delete(0),
///     ]
/// );
/// ```
pub fn parse_line(line: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        match token {
            "quit" | "exit" => {
                actions.push(Action::Quit);
                break;
            }
            "del" => {
                let index = tokens.next().ok_or(ScriptError::MissingIndex)?;
                let index = index
                    .parse()
                    .map_err(|_| ScriptError::BadIndex(index.to_string()))?;
                actions.push(Action::Delete(index));
            }
            _ => match Input::from_key(token) {
                Some(input) => actions.push(Action::Press(input)),
                None => actions.extend(token.chars().filter_map(Input::from_char).map(Action::Press)),
            },
        }
    }

    Ok(actions)
}
