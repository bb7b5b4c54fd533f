//! Calculator session state.

use super::history::{History, HistoryEntry};
use super::state::Mode;
use serde::{Deserialize, Serialize};

/// The full in-memory state of one calculator.
///
/// A session is a plain value. The interpreter never mutates a session in
/// place; each input produces a new one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) expression: String,
    pub(crate) input_buffer: String,
    pub(crate) result: Option<f64>,
    pub(crate) mode: Mode,
    pub(crate) percent_buffer: String,
    pub(crate) history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed operator/operand text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Operand currently being typed.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Result of the last computation, absent until one completes.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Digits typed while entering a percentage.
    pub fn percent_buffer(&self) -> &str {
        &self.percent_buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Text the next commit would evaluate.
    pub fn full_expression(&self) -> String {
        format!("{}{}", self.expression, self.input_buffer)
    }

    /// Delete the history entry at `display_index` (most recent first).
    ///
    /// Returns the new session and the removed entry, if the index was in
    /// range. Nothing else about the session changes.
    pub fn delete_history_entry(&self, display_index: usize) -> (Self, Option<HistoryEntry>) {
        let (history, removed) = self.history.remove_display(display_index);
        (
            Self {
                history,
                ..self.clone()
            },
            removed,
        )
    }

    pub fn with_expression(self, expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..self
        }
    }

    pub fn with_input_buffer(self, input_buffer: impl Into<String>) -> Self {
        Self {
            input_buffer: input_buffer.into(),
            ..self
        }
    }

    pub fn with_result(self, result: Option<f64>) -> Self {
        Self { result, ..self }
    }

    pub fn with_history(self, history: History) -> Self {
        Self { history, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.expression(), "");
        assert_eq!(session.input_buffer(), "");
        assert_eq!(session.result(), None);
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.percent_buffer(), "");
        assert!(session.history().is_empty());
    }

    #[test]
    fn full_expression_concatenates_parts() {
        let session = Session::new()
            .with_expression("2+")
            .with_input_buffer("3");
        assert_eq!(session.full_expression(), "2+3");
    }

    #[test]
    fn delete_history_entry_keeps_other_state() {
        let history = History::new()
            .record(HistoryEntry::new("a", 1.0))
            .record(HistoryEntry::new("b", 2.0));
        let session = Session::new()
            .with_history(history)
            .with_result(Some(2.0))
            .with_input_buffer("7");

        let (after, removed) = session.delete_history_entry(1);

        assert_eq!(removed.unwrap().label, "a");
        assert_eq!(after.history().len(), 1);
        assert_eq!(after.result(), Some(2.0));
        assert_eq!(after.input_buffer(), "7");
    }

    #[test]
    fn session_serializes_correctly() {
        let session = Session::new()
            .with_expression("1+")
            .with_result(Some(4.5))
            .with_history(History::new().record(HistoryEntry::new("4.5", 4.5)));
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
