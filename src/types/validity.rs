//! Boolean-validity shape: `(valid, optional error)`.
//!
//! [`Validity`] is `Outcome<()>` viewed as a flag plus at most one error. It
//! converts to and from `Outcome<()>` losslessly, so fail-fast validators can
//! return whichever form their callers expect.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{validation_error, ContextMap, Outcome, Validity};
//!
//! let checked: Outcome<()> = Err(validation_error("email is required", ContextMap::new()));
//! let (valid, error) = Validity::from(checked).into_pair();
//! assert!(!valid);
//! assert_eq!(error.unwrap().message(), "email is required");
//! ```
use crate::types::{ErrorValue, Outcome};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validity flag with at most one error; the flag is `true` iff no error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    error: Option<ErrorValue>,
}

impl Validity {
    #[inline]
    pub fn valid() -> Self {
        Self { error: None }
    }

    #[inline]
    pub fn invalid(error: ErrorValue) -> Self {
        Self { error: Some(error) }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    #[inline]
    pub fn error(&self) -> Option<&ErrorValue> {
        self.error.as_ref()
    }

    #[inline]
    pub fn into_error(self) -> Option<ErrorValue> {
        self.error
    }

    /// The `(valid, error)` tuple view.
    #[inline]
    pub fn into_pair(self) -> (bool, Option<ErrorValue>) {
        (self.error.is_none(), self.error)
    }

    #[inline]
    pub fn into_outcome(self) -> Outcome<()> {
        match self.error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

impl From<Outcome<()>> for Validity {
    #[inline]
    fn from(outcome: Outcome<()>) -> Self {
        Self { error: outcome.err() }
    }
}

impl From<Validity> for Outcome<()> {
    #[inline]
    fn from(validity: Validity) -> Self {
        validity.into_outcome()
    }
}
