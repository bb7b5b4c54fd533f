//! Interpreter modes.
//!
//! The calculator is either in normal arithmetic entry or collecting a
//! percentage for a margin/discount adjustment of the current result.

use serde::{Deserialize, Serialize};

/// Percentage adjustment applied to the current result.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Adjustment {
    /// Markup: `value * (1 + p/100)`
    Margin,
    /// Reduction: `value * (1 - p/100)`
    Discount,
}

impl Adjustment {
    /// Apply `percent` to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopcalc::core::Adjustment;
    ///
    /// assert_eq!(Adjustment::Discount.apply(100.0, 10.0), 90.0);
    /// ```
    pub fn apply(self, value: f64, percent: f64) -> f64 {
        match self {
            Self::Margin => value * (1.0 + percent / 100.0),
            Self::Discount => value * (1.0 - percent / 100.0),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Margin => "Margin",
            Self::Discount => "Discount",
        }
    }
}

/// Interpreter mode.
///
/// `Normal` is the initial mode. There is no terminal mode; the machine
/// runs for the life of the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Normal,
    PercentEntry(Adjustment),
}

impl Mode {
    /// Mode name for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Normal => "Normal",
            Self::PercentEntry(kind) => kind.name(),
        }
    }

    /// The adjustment being entered, if any.
    pub fn adjustment(&self) -> Option<Adjustment> {
        match self {
            Self::Normal => None,
            Self::PercentEntry(kind) => Some(*kind),
        }
    }

    pub fn is_percent_entry(&self) -> bool {
        matches!(self, Self::PercentEntry(_))
    }
}
