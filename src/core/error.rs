//! Interpreter errors.

use crate::eval::EvalError;
use thiserror::Error;

/// Errors surfaced to the caller by the interpreter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Cannot evaluate '{expression}': {source}")]
    Evaluation {
        expression: String,
        #[source]
        source: EvalError,
    },

    /// An adjustment or aggregate left the range of finite numbers
    #[error("'{operation}' does not produce a finite number")]
    NonFinite { operation: String },
}

/// Why a percent commit was absorbed instead of applied.
///
/// This is not returned as an error: the interpreter records it in the
/// step outcome and returns to normal mode.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PercentError {
    #[error("No percentage entered")]
    Empty,

    #[error("Percentage '{0}' is not a number")]
    Malformed(String),

    #[error("No result to adjust")]
    NoResult,

    #[error("Adjusted result is not a finite number")]
    NonFinite,
}
