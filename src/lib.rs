//! Shopcalc: a keyboard-driven business calculator
//!
//! Shopcalc layers margin, discount and VAT adjustments on top of a
//! running result and keeps a session history of computations. It is
//! built on the "pure core, imperative shell" philosophy: the input
//! interpreter is a pure function from `(Session, Input)` to the next
//! session, and everything with side effects (logging, files,
//! configuration) lives around it.
//!
//! # Core Concepts
//!
//! - **Session**: the whole calculator state as a plain value
//! - **Input**: a closed set of symbolic key events
//! - **Interpreter**: the transition function over sessions
//! - **History**: immutable, insertion-ordered record of computations
//!
//! # Example
//!
//! ```rust
//! use shopcalc::Calculator;
//!
//! let mut calc = Calculator::default();
//!
//! // 100, then a 10% margin, then VAT
//! calc.press_keys("100=").unwrap();
//! calc.press_keys("a10=").unwrap();
//! calc.press_keys("d").unwrap();
//!
//! let result = calc.session().result().unwrap();
//! assert!((result - 121.0).abs() < 1e-9);
//! assert_eq!(calc.session().history().len(), 3);
//! ```

pub mod calculator;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod eval;
pub mod format;
pub mod script;

// Re-export commonly used types
pub use calculator::Calculator;
pub use core::{CalcError, Input, Outcome, Session, Settings, Snapshot};
