//! The imperative shell around the pure core.
//!
//! A `Calculator` owns one session and swaps it for the next one after
//! every input. This is the single entry point for both raw keys and
//! button activations; front ends call it directly.

use crate::checkpoint::Checkpoint;
use crate::core::{
    CalcError, HistoryEntry, Input, Interpreter, Outcome, Session, Settings, Snapshot,
};
use tracing::{debug, info};

/// A calculator instance: one session plus the settings it runs under.
#[derive(Debug)]
pub struct Calculator {
    session: Session,
    interpreter: Interpreter,
}

impl Calculator {
    /// Create a calculator with an empty session.
    pub fn new(settings: Settings) -> Self {
        Self::with_session(Session::new(), settings)
    }

    /// Continue from an existing session.
    pub fn with_session(session: Session, settings: Settings) -> Self {
        Self {
            session,
            interpreter: Interpreter::new(settings),
        }
    }

    /// Continue from a checkpoint.
    pub fn resume(checkpoint: Checkpoint, settings: Settings) -> Self {
        info!(
            id = %checkpoint.id,
            entries = checkpoint.session.history().len(),
            "Resuming session from checkpoint"
        );
        Self::with_session(checkpoint.session, settings)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        self.interpreter.settings()
    }

    /// Apply one input.
    ///
    /// On error the session is left exactly as it was; the caller decides
    /// how to tell the user.
    pub fn press(&mut self, input: Input) -> Result<Outcome, CalcError> {
        let from = self.session.mode();
        let step = match self.interpreter.handle(&self.session, input) {
            Ok(step) => step,
            Err(err) => {
                debug!(%input, error = %err, "Input rejected");
                return Err(err);
            }
        };

        match &step.outcome {
            Outcome::Applied => debug!(
                %input,
                from = from.name(),
                to = step.session.mode().name(),
                "Input applied"
            ),
            Outcome::Ignored => debug!(%input, mode = from.name(), "Input ignored"),
            Outcome::Discarded(reason) => {
                debug!(%input, %reason, "Percent entry discarded")
            }
        }

        self.session = step.session;
        Ok(step.outcome)
    }

    /// Apply a key by name (see [`Input::from_key`]).
    ///
    /// Keys with no meaning are ignored.
    pub fn press_key(&mut self, key: &str) -> Result<Outcome, CalcError> {
        match Input::from_key(key) {
            Some(input) => self.press(input),
            None => {
                debug!(key, "Unmapped key ignored");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Apply every character of `keys` in order, stopping at the first
    /// error.
    pub fn press_keys(&mut self, keys: &str) -> Result<(), CalcError> {
        for c in keys.chars() {
            if let Some(input) = Input::from_char(c) {
                self.press(input)?;
            }
        }
        Ok(())
    }

    /// Delete the history entry at `display_index` (most recent first).
    pub fn delete_history(&mut self, display_index: usize) -> Option<HistoryEntry> {
        let (session, removed) = self.session.delete_history_entry(display_index);
        match &removed {
            Some(entry) => {
                debug!(display_index, label = %entry.label, "History entry deleted");
                self.session = session;
            }
            None => debug!(display_index, "No history entry at index"),
        }
        removed
    }

    /// Render-ready view of the current session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.session, &self.settings().labels)
    }

    /// Capture the current session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(&self.session)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
