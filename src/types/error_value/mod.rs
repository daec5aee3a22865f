//! Structured error payload with category, context and provenance.
//!
//! This module provides [`ErrorValue`], the rich failure type carried by every
//! [`Outcome`](crate::Outcome):
//! - a category and a non-empty message
//! - two ordered key/value namespaces (context for situational facts, metadata
//!   for debugging facts)
//! - the capture timestamp and the constructing call site
//! - an optional wrapped [`ErrorCause`]
//!
//! Every builder step consumes the value and returns a new one; nothing mutates
//! an `ErrorValue` behind a shared reference.

use crate::types::error_formatter::{DetailFormat, DetailFormatBuilder};
use crate::types::{ContextMap, ContextValue, ErrorCategory, Origin};
use chrono::{DateTime, SecondsFormat, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod cause;
mod traits;

pub use cause::{Causes, ErrorCause};

/// Rich, immutable error value.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorCategory, ErrorValue};
///
/// let err = ErrorValue::new(ErrorCategory::Validation, "email is required")
///     .with_context("field_name", "email");
///
/// assert_eq!(err.to_string(), "validation_error: email is required");
/// assert!(err.to_detailed_string().contains("Context: {\"field_name\": \"email\"}"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ErrorValueRepr")
)]
pub struct ErrorValue {
    category: ErrorCategory,
    message: String,
    context: ContextMap,
    metadata: ContextMap,
    timestamp: DateTime<Utc>,
    origin: Origin,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    cause: Option<Box<ErrorCause>>,
}

/// Wire form accepted by `Deserialize`; the message contract is checked on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ErrorValueRepr {
    category: ErrorCategory,
    message: String,
    #[serde(default)]
    context: ContextMap,
    #[serde(default)]
    metadata: ContextMap,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    origin: Origin,
    #[serde(default)]
    cause: Option<Box<ErrorCause>>,
}

#[cfg(feature = "serde")]
impl TryFrom<ErrorValueRepr> for ErrorValue {
    type Error = String;

    fn try_from(repr: ErrorValueRepr) -> Result<Self, Self::Error> {
        if repr.message.is_empty() {
            return Err(format!("ErrorValue message must not be empty ({})", repr.category));
        }
        Ok(Self {
            category: repr.category,
            message: repr.message,
            context: repr.context,
            metadata: repr.metadata,
            timestamp: repr.timestamp,
            origin: repr.origin,
            cause: repr.cause,
        })
    }
}

impl ErrorValue {
    /// Creates an error stamped with the current time and the caller's location.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. An empty message is a contract violation at
    /// the call site, not a recoverable condition.
    #[track_caller]
    pub fn new<C, M>(category: C, message: M) -> Self
    where
        C: Into<ErrorCategory>,
        M: Into<String>,
    {
        Self::at(category.into(), message.into(), Origin::caller())
    }

    /// Creates an error with an explicit origin.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn at(category: ErrorCategory, message: String, origin: Origin) -> Self {
        assert!(!message.is_empty(), "ErrorValue message must not be empty ({category})");
        Self {
            category,
            message,
            context: ContextMap::new(),
            metadata: ContextMap::new(),
            timestamp: Utc::now(),
            origin,
            cause: None,
        }
    }

    /// Adds one context entry.
    #[inline]
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.context.insert(key, value);
        self
    }

    /// Overlays a whole map onto the context.
    #[inline]
    pub fn with_contexts<I>(mut self, entries: I) -> Self
    where
        I: Into<ContextMap>,
    {
        self.context = self.context.merged(&entries.into());
        self
    }

    /// Adds one metadata entry.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Overlays a whole map onto the metadata.
    #[inline]
    pub fn with_metadatas<I>(mut self, entries: I) -> Self
    where
        I: Into<ContextMap>,
    {
        self.metadata = self.metadata.merged(&entries.into());
        self
    }

    /// Sets (or replaces) the wrapped cause.
    #[inline]
    pub fn with_cause<C>(mut self, cause: C) -> Self
    where
        C: Into<ErrorCause>,
    {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    /// Returns a copy of this error with `extra` merged into its context.
    ///
    /// Category, message, timestamp, origin and cause are preserved; the
    /// borrowed original is left untouched.
    pub fn enriched<I>(&self, extra: I) -> Self
    where
        I: Into<ContextMap>,
    {
        Self { context: self.context.merged(&extra.into()), ..self.clone() }
    }

    /// Wraps this error as the cause of a new, higher-level error.
    ///
    /// The new error gets a fresh timestamp and the caller's origin.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    #[track_caller]
    pub fn wrap<C, M>(self, category: C, message: M) -> Self
    where
        C: Into<ErrorCategory>,
        M: Into<String>,
    {
        Self::at(category.into(), message.into(), Origin::caller()).with_cause(self)
    }

    #[inline]
    pub fn category(&self) -> &ErrorCategory {
        &self.category
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn context(&self) -> &ContextMap {
        &self.context
    }

    #[inline]
    pub fn metadata(&self) -> &ContextMap {
        &self.metadata
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The capture time as an RFC 3339 string with microsecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    #[inline]
    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_deref()
    }

    /// Iterates the cause chain, nearest cause first.
    #[inline]
    pub fn causes(&self) -> Causes<'_> {
        Causes::new(self.cause())
    }

    /// The deepest cause in the chain, if any.
    pub fn root_cause(&self) -> Option<&ErrorCause> {
        self.causes().last()
    }

    /// Returns `true` when this error or any wrapped error has `category`.
    pub fn has_category(&self, category: &ErrorCategory) -> bool {
        &self.category == category
            || self
                .causes()
                .any(|cause| cause.as_error().is_some_and(|e| e.category() == category))
    }

    /// Returns a builder for customizing the detailed rendering.
    #[must_use]
    #[inline]
    pub fn detail(&self) -> DetailFormatBuilder<'_> {
        DetailFormatBuilder::new(self)
    }

    /// Renders the detailed diagnostic form.
    ///
    /// `Error: <category> | Message: <message> | Timestamp: <ts> | Source: <origin>`
    /// followed by `Context`, `Metadata` and `Cause` segments when present.
    #[must_use]
    pub fn to_detailed_string(&self) -> String {
        self.detail().to_string()
    }

    /// Renders the detailed form with a caller-provided configuration.
    #[must_use]
    pub fn detailed_with(&self, config: &DetailFormat) -> String {
        config.render(self)
    }

    /// Emits this error as a `tracing` warning.
    #[cfg(feature = "tracing")]
    pub fn log(&self) {
        tracing::warn!(
            category = %self.category,
            origin = %self.origin,
            detail = %self.to_detailed_string(),
            "{}",
            self.message
        );
    }

    /// No-op without the `tracing` feature.
    #[cfg(not(feature = "tracing"))]
    #[inline]
    pub fn log(&self) {}
}

/// Substitutes `fallback` for an empty message taken from a foreign error.
pub(crate) fn non_empty(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}
