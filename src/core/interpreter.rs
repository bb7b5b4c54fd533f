//! The input interpreter: a pure transition function from
//! `(Session, Input)` to the next `Session`.
//!
//! Two modes are handled. In `Normal` mode inputs build and commit
//! arithmetic expressions and run the history commands. In
//! `PercentEntry` mode only digits, commit and cancel act; every other
//! input is ignored. Margin and discount share the percent-entry handling
//! and differ only in the arithmetic applied on commit.

use super::error::{CalcError, PercentError};
use super::guard::Guard;
use super::history::HistoryEntry;
use super::input::{Command, Input, Operator};
use super::session::Session;
use super::settings::Settings;
use super::state::{Adjustment, Mode};
use crate::eval;
use crate::format::number_text;

/// What an input did to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The session changed
    Applied,

    /// The input has no effect in the current state
    Ignored,

    /// A percent commit was absorbed; the interpreter is back in normal mode
    Discarded(PercentError),
}

/// Result of handling a single input.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub session: Session,
    pub outcome: Outcome,
}

impl Step {
    fn applied(session: Session) -> Self {
        Self {
            session,
            outcome: Outcome::Applied,
        }
    }

    fn ignored(session: &Session) -> Self {
        Self {
            session: session.clone(),
            outcome: Outcome::Ignored,
        }
    }
}

/// Handle one input with default settings (10% VAT, English labels).
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{handle_input, Input, Session};
///
/// let mut session = Session::new();
/// for c in "2+3*4=".chars() {
///     let input = Input::from_char(c).unwrap();
///     session = handle_input(&session, input).unwrap().session;
/// }
///
/// assert_eq!(session.result(), Some(14.0));
/// assert_eq!(session.history().last().unwrap().label, "2+3*4");
/// ```
pub fn handle_input(session: &Session, input: Input) -> Result<Step, CalcError> {
    Interpreter::default().handle(session, input)
}

/// Interprets inputs against a session using fixed settings.
#[derive(Debug)]
pub struct Interpreter {
    settings: Settings,
    result_guard: Guard,
    open: Guard,
}

impl Interpreter {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            result_guard: Guard::requires_result(),
            open: Guard::always(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle one input, producing the next session.
    ///
    /// The given session is never modified. On `Err` the caller keeps its
    /// current session: a failed evaluation or an overflowing adjustment
    /// changes nothing.
    pub fn handle(&self, session: &Session, input: Input) -> Result<Step, CalcError> {
        match session.mode {
            Mode::Normal => self.normal(session, input),
            Mode::PercentEntry(kind) => Ok(self.percent_entry(session, kind, input)),
        }
    }

    /// Guard that must pass before `command` can act.
    pub fn guard(&self, command: Command) -> &Guard {
        match command {
            Command::MarginMode | Command::DiscountMode | Command::ApplyVat => &self.result_guard,
            Command::SumHistory
            | Command::SumHistoryVat
            | Command::ClearHistory
            | Command::ClearEntry => &self.open,
        }
    }

    fn normal(&self, session: &Session, input: Input) -> Result<Step, CalcError> {
        let step = match input {
            Input::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => {
                    let mut next = session.clone();
                    next.input_buffer.push(c);
                    Step::applied(next)
                }
                None => Step::ignored(session),
            },
            Input::Point => {
                if session.input_buffer.contains('.') {
                    Step::ignored(session)
                } else {
                    let mut next = session.clone();
                    next.input_buffer.push('.');
                    Step::applied(next)
                }
            }
            Input::Operator(op) => self.operator(session, op),
            Input::Backspace => {
                if session.input_buffer.is_empty() {
                    Step::ignored(session)
                } else {
                    let mut next = session.clone();
                    next.input_buffer.pop();
                    Step::applied(next)
                }
            }
            Input::Commit => self.commit(session)?,
            Input::Cancel => Step::ignored(session),
            Input::Command(command) => self.command(session, command)?,
        };
        Ok(step)
    }

    fn operator(&self, session: &Session, op: Operator) -> Step {
        if !session.input_buffer.is_empty() {
            let mut next = session.clone();
            next.expression.push_str(&session.input_buffer);
            next.expression.push(op.symbol());
            next.input_buffer.clear();
            return Step::applied(next);
        }

        match session.result {
            Some(result) => {
                let mut next = session.clone();
                next.expression = format!("{}{}", number_text(result), op.symbol());
                next.result = None;
                Step::applied(next)
            }
            None => Step::ignored(session),
        }
    }

    fn commit(&self, session: &Session) -> Result<Step, CalcError> {
        let full = session.full_expression();
        let value = eval::evaluate(&full).map_err(|source| CalcError::Evaluation {
            expression: full.clone(),
            source,
        })?;

        let mut next = session.clone();
        next.result = Some(value);
        next.history = session.history.record(HistoryEntry::new(full, value));
        next.expression.clear();
        next.input_buffer.clear();
        Ok(Step::applied(next))
    }

    fn command(&self, session: &Session, command: Command) -> Result<Step, CalcError> {
        if !self.guard(command).check(session) {
            return Ok(Step::ignored(session));
        }

        let labels = &self.settings.labels;
        let mut next = session.clone();

        match command {
            Command::MarginMode => {
                next.mode = Mode::PercentEntry(Adjustment::Margin);
                next.percent_buffer.clear();
            }
            Command::DiscountMode => {
                next.mode = Mode::PercentEntry(Adjustment::Discount);
                next.percent_buffer.clear();
            }
            Command::ApplyVat => {
                let Some(result) = session.result else {
                    return Ok(Step::ignored(session));
                };
                let label = format!("{} + {}", number_text(result), labels.vat);
                let value = finite(self.settings.add_vat(result), &label)?;
                next.history = session.history.record(HistoryEntry::new(label, value));
                next.result = Some(value);
            }
            Command::SumHistory => {
                let total = finite(session.history.total(), &labels.grand_total)?;
                next.history = session
                    .history
                    .record(HistoryEntry::new(labels.grand_total.clone(), total));
                next.result = Some(total);
            }
            Command::SumHistoryVat => {
                let total = finite(
                    self.settings.add_vat(session.history.total()),
                    &labels.grand_total_vat,
                )?;
                next.history = session
                    .history
                    .record(HistoryEntry::new(labels.grand_total_vat.clone(), total));
                next.result = Some(total);
            }
            Command::ClearHistory => {
                next.history = session.history.clear();
                next.result = None;
            }
            Command::ClearEntry => {
                next.input_buffer.clear();
                next.expression.clear();
                next.result = None;
            }
        }

        Ok(Step::applied(next))
    }

    fn percent_entry(&self, session: &Session, kind: Adjustment, input: Input) -> Step {
        match input {
            Input::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => {
                    let mut next = session.clone();
                    next.percent_buffer.push(c);
                    Step::applied(next)
                }
                None => Step::ignored(session),
            },
            Input::Commit => self.commit_percent(session, kind),
            Input::Cancel => Step::applied(leave_percent_entry(session)),
            _ => Step::ignored(session),
        }
    }

    fn commit_percent(&self, session: &Session, kind: Adjustment) -> Step {
        let percent = match parse_percent(&session.percent_buffer) {
            Ok(percent) => percent,
            Err(reason) => return discarded(session, reason),
        };
        let Some(result) = session.result else {
            return discarded(session, PercentError::NoResult);
        };

        let labels = &self.settings.labels;
        let value = kind.apply(result, percent);
        if !value.is_finite() {
            return discarded(session, PercentError::NonFinite);
        }
        let label = match kind {
            Adjustment::Margin => format!(
                "{} + {} {}%",
                number_text(result),
                labels.margin,
                number_text(percent)
            ),
            Adjustment::Discount => format!(
                "{} - {} {}%",
                number_text(result),
                labels.discount,
                number_text(percent)
            ),
        };

        let mut next = leave_percent_entry(session);
        next.history = session.history.record(HistoryEntry::new(label, value));
        next.result = Some(value);
        Step::applied(next)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

fn leave_percent_entry(session: &Session) -> Session {
    let mut next = session.clone();
    next.mode = Mode::Normal;
    next.percent_buffer.clear();
    next
}

fn discarded(session: &Session, reason: PercentError) -> Step {
    Step {
        session: leave_percent_entry(session),
        outcome: Outcome::Discarded(reason),
    }
}

fn finite(value: f64, operation: &str) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite {
            operation: operation.to_string(),
        })
    }
}

fn parse_percent(buffer: &str) -> Result<f64, PercentError> {
    if buffer.is_empty() {
        return Err(PercentError::Empty);
    }
    match buffer.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(PercentError::Malformed(buffer.to_string())),
    }
}
