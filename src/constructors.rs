//! Factory functions for the recognized error categories.
//!
//! All of them are `#[track_caller]`: the origin recorded on the returned
//! [`ErrorValue`] is the line that called the factory.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{io_error, make_error, ContextMap, ErrorCategory};
//!
//! let err = make_error(
//!     "validation_error",
//!     "email is required",
//!     [("field_name", "email")],
//!     ContextMap::new(),
//!     None,
//! );
//! assert_eq!(err.category(), &ErrorCategory::Validation);
//!
//! let disk = io_error("failed to persist user", [("path", "/var/users")], Some("disk full".into()));
//! assert_eq!(disk.cause().unwrap().to_string(), "disk full");
//! ```

use crate::types::{ContextMap, ErrorCategory, ErrorCause, ErrorValue, Origin};

/// Builds an [`ErrorValue`] from all of its parts.
///
/// # Panics
///
/// Panics if `message` is empty.
#[track_caller]
pub fn make_error<C, M, X, D>(
    category: C,
    message: M,
    context: X,
    metadata: D,
    cause: Option<ErrorCause>,
) -> ErrorValue
where
    C: Into<ErrorCategory>,
    M: Into<String>,
    X: Into<ContextMap>,
    D: Into<ContextMap>,
{
    let error = ErrorValue::at(category.into(), message.into(), Origin::caller())
        .with_contexts(context)
        .with_metadatas(metadata);
    match cause {
        Some(cause) => error.with_cause(cause),
        None => error,
    }
}

/// Input failed a declared business rule.
///
/// # Panics
///
/// Panics if `message` is empty.
#[track_caller]
pub fn validation_error<M, X>(message: M, context: X) -> ErrorValue
where
    M: Into<String>,
    X: Into<ContextMap>,
{
    ErrorValue::at(ErrorCategory::Validation, message.into(), Origin::caller()).with_contexts(context)
}

/// A lookup found no matching entity.
///
/// # Panics
///
/// Panics if `message` is empty.
#[track_caller]
pub fn not_found_error<M, X>(message: M, context: X) -> ErrorValue
where
    M: Into<String>,
    X: Into<ContextMap>,
{
    ErrorValue::at(ErrorCategory::NotFound, message.into(), Origin::caller()).with_contexts(context)
}

/// Storage or filesystem failure, optionally wrapping what caused it.
///
/// # Panics
///
/// Panics if `message` is empty.
#[track_caller]
pub fn io_error<M, X>(message: M, context: X, cause: Option<ErrorCause>) -> ErrorValue
where
    M: Into<String>,
    X: Into<ContextMap>,
{
    with_optional_cause(
        ErrorValue::at(ErrorCategory::Io, message.into(), Origin::caller()).with_contexts(context),
        cause,
    )
}

/// Remote-call failure, optionally wrapping what caused it.
///
/// # Panics
///
/// Panics if `message` is empty.
#[track_caller]
pub fn network_error<M, X>(message: M, context: X, cause: Option<ErrorCause>) -> ErrorValue
where
    M: Into<String>,
    X: Into<ContextMap>,
{
    with_optional_cause(
        ErrorValue::at(ErrorCategory::Network, message.into(), Origin::caller())
            .with_contexts(context),
        cause,
    )
}

#[inline]
fn with_optional_cause(error: ErrorValue, cause: Option<ErrorCause>) -> ErrorValue {
    match cause {
        Some(cause) => error.with_cause(cause),
        None => error,
    }
}
