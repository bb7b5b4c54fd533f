//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Modes (`Normal`, `PercentEntry`) and symbolic inputs
//! - Guard predicates for commands that need a result
//! - Immutable computation history
//! - The session value and the transition function over it
//! - The display snapshot derived from a session
//!
//! All logic in this module is pure (no side effects, no logging),
//! following the "pure core, imperative shell" philosophy.

mod display;
mod error;
mod guard;
mod history;
mod input;
mod interpreter;
mod session;
mod settings;
mod state;

pub use display::{HistoryRow, Snapshot};
pub use error::{CalcError, PercentError};
pub use guard::Guard;
pub use history::{History, HistoryEntry};
pub use input::{Command, Input, Operator};
pub use interpreter::{handle_input, Interpreter, Outcome, Step};
pub use session::Session;
pub use settings::{Labels, Language, Settings, DEFAULT_VAT_RATE};
pub use state::{Adjustment, Mode};
