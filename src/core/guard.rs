//! Guard predicates for calculator commands.
//!
//! Guards are pure boolean functions over a [`Session`] that decide whether
//! a command can act. A command whose guard fails is a no-op.

use super::session::Session;

/// Pure predicate that determines if a command can execute.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{Guard, Session};
///
/// let guard = Guard::requires_result();
///
/// assert!(!guard.check(&Session::default()));
/// assert!(guard.check(&Session::default().with_result(Some(100.0))));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&Session) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Session) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that passes only when a result is present.
    ///
    /// Margin, discount and VAT adjust the last committed result, so
    /// they are meaningless without one.
    pub fn requires_result() -> Self {
        Self::new(|session| session.result().is_some())
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard allows the command on this session.
    pub fn check(&self, session: &Session) -> bool {
        (self.predicate)(session)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
