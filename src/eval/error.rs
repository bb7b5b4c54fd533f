//! Evaluation errors for arithmetic expressions.

use thiserror::Error;

/// Errors that can occur when evaluating an arithmetic expression.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },

    #[error("Number '{text}' is out of range")]
    NumberOutOfRange { text: String },

    #[error("Expression ends unexpectedly (missing operand)")]
    UnexpectedEnd,

    #[error("Unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("Result is not a finite number")]
    NonFinite,
}
