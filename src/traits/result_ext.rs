//! Extension trait for enriching and bridging [`Outcome`]s.
//!
//! This module provides [`OutcomeExt`], which adds context, wrapping, legacy
//! projection and logging to `Result<T, ErrorValue>` without verbose
//! `.map_err()` chains. Every method leaves the success arm untouched and never
//! evaluates anything lazy on success.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeExt;
//! use outcome_rail::{not_found_error, ContextMap, ErrorCategory, Outcome};
//!
//! fn load_user(id: u64) -> Outcome<String> {
//!     Err(not_found_error("user not found", ContextMap::new()))
//! }
//!
//! let err = load_user(7)
//!     .context("user_id", 7)
//!     .wrap_err(ErrorCategory::Io, "loading profile")
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "io_error: loading profile");
//! assert_eq!(err.cause().unwrap().to_string(), "not_found_error: user not found");
//! ```

use crate::types::{
    ContextMap, ContextValue, ErrorCategory, ErrorValue, LegacyError, LegacyOutcome, Origin,
    Outcome,
};

/// Extension methods for `Outcome<T>`.
pub trait OutcomeExt<T>: Sized {
    /// On failure, adds one context entry to the error.
    fn context<K, V>(self, key: K, value: V) -> Outcome<T>
    where
        K: Into<String>,
        V: Into<ContextValue>;

    /// On failure, merges a lazily built map into the error's context.
    ///
    /// The closure is only called if the outcome is a failure.
    fn context_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> ContextMap;

    /// On failure, adds one metadata entry to the error.
    fn metadata<K, V>(self, key: K, value: V) -> Outcome<T>
    where
        K: Into<String>,
        V: Into<ContextValue>;

    /// On failure, wraps the error as the cause of a new error raised at the caller.
    ///
    /// # Panics
    ///
    /// Panics on failure if `message` is empty.
    fn wrap_err<C, M>(self, category: C, message: M) -> Outcome<T>
    where
        C: Into<ErrorCategory>,
        M: Into<String>;

    /// Projects the error arm to its legacy string form.
    fn to_legacy(self) -> LegacyOutcome<T>;

    /// The `(value, error)` tuple view; exactly one side is `Some`.
    fn into_pair(self) -> (Option<T>, Option<ErrorValue>);

    /// Emits a `tracing` warning for a failure and passes the outcome through.
    fn log_failure(self) -> Outcome<T>;
}

impl<T> OutcomeExt<T> for Outcome<T> {
    #[inline]
    fn context<K, V>(self, key: K, value: V) -> Outcome<T>
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.map_err(|e| e.with_context(key, value))
    }

    #[inline]
    fn context_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> ContextMap,
    {
        self.map_err(|e| e.with_contexts(f()))
    }

    #[inline]
    fn metadata<K, V>(self, key: K, value: V) -> Outcome<T>
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.map_err(|e| e.with_metadata(key, value))
    }

    #[track_caller]
    #[inline]
    fn wrap_err<C, M>(self, category: C, message: M) -> Outcome<T>
    where
        C: Into<ErrorCategory>,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let origin = Origin::caller();
                Err(ErrorValue::at(category.into(), message.into(), origin).with_cause(error))
            }
        }
    }

    #[inline]
    fn to_legacy(self) -> LegacyOutcome<T> {
        self.map_err(LegacyError::from)
    }

    #[inline]
    fn into_pair(self) -> (Option<T>, Option<ErrorValue>) {
        match self {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        }
    }

    #[inline]
    fn log_failure(self) -> Outcome<T> {
        if let Err(error) = &self {
            error.log();
        }
        self
    }
}

/// Tuple view for legacy outcomes.
pub trait LegacyOutcomeExt<T> {
    /// The `(value, error)` tuple view; exactly one side is `Some`.
    fn into_pair(self) -> (Option<T>, Option<LegacyError>);
}

impl<T> LegacyOutcomeExt<T> for LegacyOutcome<T> {
    #[inline]
    fn into_pair(self) -> (Option<T>, Option<LegacyError>) {
        match self {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        }
    }
}
