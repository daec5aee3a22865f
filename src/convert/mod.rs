//! Conversion helpers between rich, legacy, and multi-error outcomes.
//!
//! These adapters let newly written call sites that return [`ErrorValue`]s
//! interoperate with call sites that still speak plain strings. The bridge is
//! lossy in one direction only: rich errors project to `"<category>: <message>"`,
//! and the `from_legacy_*` adapters pass legacy values through without ever
//! parsing structure back out of a string.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{validation_error, ContextMap, Outcome};
//!
//! let rich: Outcome<()> = Err(validation_error("invalid email format", ContextMap::new()));
//! let (valid, error) = to_legacy_validity(rich);
//! assert!(!valid);
//! assert_eq!(error.unwrap(), "validation_error: invalid email format");
//! ```

use crate::types::{
    ErrorCategory, ErrorValue, LegacyError, LegacyOutcome, Origin, Outcome, Validity,
};
use crate::validation::core::Validation;

/// Projects the error arm of an outcome to its legacy string form.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::to_legacy;
/// use outcome_rail::{not_found_error, ContextMap, Outcome};
///
/// let ok: Outcome<i32> = Ok(1);
/// assert_eq!(to_legacy(ok), Ok(1));
///
/// let err: Outcome<i32> = Err(not_found_error("user not found", ContextMap::new()));
/// assert_eq!(to_legacy(err).unwrap_err(), "not_found_error: user not found");
/// ```
#[inline]
pub fn to_legacy<T>(outcome: Outcome<T>) -> LegacyOutcome<T> {
    outcome.map_err(LegacyError::from)
}

/// Boolean-validity legacy view: `(valid, error string)`.
#[inline]
pub fn to_legacy_validity(outcome: Outcome<()>) -> (bool, Option<LegacyError>) {
    let (valid, error) = Validity::from(outcome).into_pair();
    (valid, error.map(LegacyError::from))
}

/// Multi-error legacy view: `(valid, error strings)` in accumulation order.
#[inline]
pub fn to_legacy_errors<A>(validation: Validation<ErrorValue, A>) -> (bool, Vec<LegacyError>) {
    let (valid, errors) = validation.into_pair();
    (valid, errors.into_iter().map(LegacyError::from).collect())
}

/// Re-expresses a legacy `(valid, error)` pair as a legacy outcome.
///
/// A pair marked invalid without an error string is kept invalid with an empty
/// legacy error rather than silently turning valid.
#[inline]
pub fn from_legacy_validation(pair: (bool, Option<LegacyError>)) -> LegacyOutcome<()> {
    match pair {
        (true, None) => Ok(()),
        (_, Some(error)) => Err(error),
        (false, None) => Err(LegacyError::new(String::new())),
    }
}

/// Re-expresses a legacy `(value, error)` pair as a legacy outcome.
///
/// An error string wins over a value; a pair with neither yields `Ok(None)`.
#[inline]
pub fn from_legacy_pair<T>(pair: (Option<T>, Option<LegacyError>)) -> LegacyOutcome<Option<T>> {
    match pair {
        (_, Some(error)) => Err(error),
        (value, None) => Ok(value),
    }
}

/// Re-expresses a legacy `(valid, errors)` pair as a multi-error validation.
///
/// A non-empty list is always invalid, whatever the flag says. A pair marked
/// invalid with an empty list stays invalid with one empty legacy error, as in
/// [`from_legacy_validation`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_legacy_errors;
/// use outcome_rail::LegacyError;
///
/// assert!(from_legacy_errors((true, vec![])).is_valid());
/// assert_eq!(from_legacy_errors((false, vec![])).error_count(), 1);
/// assert!(from_legacy_errors((true, vec![LegacyError::new("late")])).is_invalid());
/// ```
#[inline]
pub fn from_legacy_errors(pair: (bool, Vec<LegacyError>)) -> Validation<LegacyError, ()> {
    match pair {
        (false, errors) if errors.is_empty() => Validation::invalid(LegacyError::new(String::new())),
        (_, errors) => Validation::from_errors(errors, ()),
    }
}

/// Collapses a multi-error validation to a single-error outcome, keeping the first error.
///
/// A hand-built `Invalid` holding no errors has neither a value nor an error to
/// return; it becomes a `validation_error` raised at the caller.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::validation_to_outcome;
/// use outcome_rail::validation::Validation;
/// use outcome_rail::{validation_error, ContextMap};
///
/// let invalid = Validation::<_, i32>::invalid_many([
///     validation_error("first", ContextMap::new()),
///     validation_error("second", ContextMap::new()),
/// ]);
/// assert_eq!(validation_to_outcome(invalid).unwrap_err().message(), "first");
/// ```
#[track_caller]
#[inline]
pub fn validation_to_outcome<T>(validation: Validation<ErrorValue, T>) -> Outcome<T> {
    match validation {
        Validation::Valid(value) => Ok(value),
        Validation::Invalid(errors) => match errors.into_iter().next() {
            Some(error) => Err(error),
            None => Err(ErrorValue::at(
                ErrorCategory::Validation,
                "validation failed without recorded errors".into(),
                Origin::caller(),
            )),
        },
    }
}

/// Lifts a single-error outcome into a validation.
#[inline]
pub fn outcome_to_validation<T, E>(outcome: Result<T, E>) -> Validation<E, T> {
    Validation::from_result(outcome)
}

/// Builds a validation from independent check results, keeping every error in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_checks;
///
/// let checks: Vec<Result<(), &str>> = vec![Err("a"), Ok(()), Err("b")];
/// let validation = collect_checks(checks);
/// assert_eq!(validation.into_pair(), (false, vec!["a", "b"]));
/// ```
pub fn collect_checks<E, I>(checks: I) -> Validation<E, ()>
where
    I: IntoIterator<Item = Result<(), E>>,
{
    Validation::from_errors(checks.into_iter().filter_map(Result::err), ())
}
