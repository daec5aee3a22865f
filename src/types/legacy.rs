//! Plain-string error form kept for call sites that predate [`ErrorValue`].
//!
//! A [`LegacyError`] is the `"<category>: <message>"` projection of an
//! `ErrorValue`. The projection is one-way: context, metadata, timestamp,
//! origin and cause are dropped, and nothing in this crate parses a legacy
//! string back into structure.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{validation_error, ContextMap, LegacyError};
//!
//! let rich = validation_error("invalid email format", ContextMap::new());
//! let legacy = LegacyError::from(&rich);
//! assert_eq!(legacy, "validation_error: invalid email format");
//! ```
use crate::types::ErrorValue;
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// String-only error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct LegacyError(String);

impl LegacyError {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for LegacyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for LegacyError {}

impl From<&ErrorValue> for LegacyError {
    #[inline]
    fn from(error: &ErrorValue) -> Self {
        Self(error.to_string())
    }
}

impl From<ErrorValue> for LegacyError {
    #[inline]
    fn from(error: ErrorValue) -> Self {
        Self::from(&error)
    }
}

impl From<String> for LegacyError {
    #[inline]
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for LegacyError {
    #[inline]
    fn from(message: &str) -> Self {
        Self(message.to_owned())
    }
}

impl From<LegacyError> for String {
    #[inline]
    fn from(error: LegacyError) -> Self {
        error.0
    }
}

impl AsRef<str> for LegacyError {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LegacyError {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LegacyError {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for LegacyError {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}
