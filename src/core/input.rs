//! Symbolic input events.
//!
//! Every key press or button activation is translated into exactly one
//! [`Input`]. Front ends never invent new event kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Named calculator commands (the letter keys of the keyboard layout).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// `a`
    MarginMode,
    /// `s`
    DiscountMode,
    /// `d`
    ApplyVat,
    /// `q`
    SumHistory,
    /// `w`
    SumHistoryVat,
    /// `e`
    ClearHistory,
    /// `c`
    ClearEntry,
}

impl Command {
    pub fn key(&self) -> char {
        match self {
            Self::MarginMode => 'a',
            Self::DiscountMode => 's',
            Self::ApplyVat => 'd',
            Self::SumHistory => 'q',
            Self::SumHistoryVat => 'w',
            Self::ClearHistory => 'e',
            Self::ClearEntry => 'c',
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::MarginMode => "margin",
            Self::DiscountMode => "discount",
            Self::ApplyVat => "vat",
            Self::SumHistory => "sum",
            Self::SumHistoryVat => "sum-vat",
            Self::ClearHistory => "clear-history",
            Self::ClearEntry => "clear",
        }
    }

    const ALL: [Command; 7] = [
        Self::MarginMode,
        Self::DiscountMode,
        Self::ApplyVat,
        Self::SumHistory,
        Self::SumHistoryVat,
        Self::ClearHistory,
        Self::ClearEntry,
    ];
}

/// A discrete input event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Input {
    /// A digit `0`..=`9`
    Digit(u8),
    /// Decimal point
    Point,
    Operator(Operator),
    /// `Enter` or `=`
    Commit,
    Backspace,
    /// `Escape`
    Cancel,
    Command(Command),
}

impl Input {
    /// Map a single character to an input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopcalc::core::{Command, Input, Operator};
    ///
    /// assert_eq!(Input::from_char('7'), Some(Input::Digit(7)));
    /// assert_eq!(Input::from_char('*'), Some(Input::Operator(Operator::Multiply)));
    /// assert_eq!(Input::from_char('d'), Some(Input::Command(Command::ApplyVat)));
    /// assert_eq!(Input::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(digit) = c.to_digit(10) {
            return Some(Self::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::Point),
            '=' | '\n' | '\r' => Some(Self::Commit),
            '\u{8}' => Some(Self::Backspace),
            '\u{1b}' => Some(Self::Cancel),
            _ => Command::ALL
                .iter()
                .find(|cmd| cmd.key() == c)
                .map(|cmd| Self::Command(*cmd)),
        }
    }

    /// Map a key name to an input.
    ///
    /// Accepts single characters (see [`Input::from_char`]), the keyboard
    /// names `Enter`, `Backspace` and `Escape`, and long command names such
    /// as `margin` or `sum-vat`. Unknown keys map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        match key {
            "Enter" | "enter" => Some(Self::Commit),
            "Backspace" | "backspace" | "bs" => Some(Self::Backspace),
            "Escape" | "escape" | "esc" => Some(Self::Cancel),
            _ => Command::ALL
                .iter()
                .find(|cmd| cmd.name() == key)
                .map(|cmd| Self::Command(*cmd)),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Point => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Commit => f.write_str("Enter"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Cancel => f.write_str("Escape"),
            Self::Command(cmd) => f.write_str(cmd.name()),
        }
    }
}
