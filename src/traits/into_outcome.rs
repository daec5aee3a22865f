//! Lifting foreign `Result`s into [`Outcome`]s.
//!
//! Call sites that talk to the standard library or other crates receive their
//! errors as arbitrary types. [`IntoOutcome`] turns such a result into an
//! `Outcome` of a chosen category while keeping the foreign error's text as an
//! external [`ErrorCause`](crate::ErrorCause).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::{ErrorCategory, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome_with(ErrorCategory::Validation, "port must be a number")
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.to_string(), "validation_error: port must be a number");
//! assert!(err.cause().unwrap().is_external());
//! ```
use crate::types::error_value::non_empty;
use crate::types::{ErrorCategory, ErrorCause, ErrorValue, Origin, Outcome};
use std::fmt::Display;

/// Converts a `Result` with a displayable error into an [`Outcome`].
pub trait IntoOutcome<T> {
    /// Uses the foreign error's text as the message, or `"external failure"`
    /// when that text is empty.
    fn into_outcome<C>(self, category: C) -> Outcome<T>
    where
        C: Into<ErrorCategory>;

    /// Uses `message` and keeps the foreign error as the cause.
    ///
    /// # Panics
    ///
    /// Panics on failure if `message` is empty.
    fn into_outcome_with<C, M>(self, category: C, message: M) -> Outcome<T>
    where
        C: Into<ErrorCategory>,
        M: Into<String>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Display,
{
    #[track_caller]
    fn into_outcome<C>(self, category: C) -> Outcome<T>
    where
        C: Into<ErrorCategory>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let origin = Origin::caller();
                let cause = ErrorCause::external(&error);
                let message = non_empty(error.to_string(), "external failure");
                Err(ErrorValue::at(category.into(), message, origin).with_cause(cause))
            }
        }
    }

    #[track_caller]
    fn into_outcome_with<C, M>(self, category: C, message: M) -> Outcome<T>
    where
        C: Into<ErrorCategory>,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let origin = Origin::caller();
                Err(ErrorValue::at(category.into(), message.into(), origin)
                    .with_cause(ErrorCause::external(&error)))
            }
        }
    }
}
