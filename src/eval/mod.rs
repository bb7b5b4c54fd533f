//! Restricted arithmetic evaluation.
//!
//! Expressions are limited to decimal literals and the four basic
//! operators with standard precedence (`*` and `/` before `+` and `-`),
//! left-associative within a precedence level. Nothing else is accepted:
//! there are no identifiers, calls or parentheses, so no input can do
//! anything beyond arithmetic.
//!
//! # Example
//!
//! ```rust
//! use shopcalc::eval::{evaluate, EvalError};
//!
//! assert_eq!(evaluate("2+3*4"), Ok(14.0));
//! assert_eq!(evaluate("10-4-3"), Ok(3.0));
//! assert_eq!(evaluate("2+"), Err(EvalError::UnexpectedEnd));
//! assert_eq!(evaluate("1/0"), Err(EvalError::NonFinite));
//! ```

pub mod error;
mod lexer;
mod parser;

pub use error::EvalError;
pub use lexer::{tokenize, Token, TokenKind};

use parser::Parser;

/// Evaluate an arithmetic expression to a finite number.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression)?;
    let value = Parser::new(&tokens).evaluate()?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    // -0 only arises from sign games ("-0", "0*-1"); report plain zero
    Ok(if value == 0.0 { 0.0 } else { value })
}
