use super::ErrorValue;
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The failure an [`ErrorValue`] wraps.
///
/// Either another `ErrorValue` from a lower layer, or an opaque descriptor of a
/// foreign error (its rendered message) when the failure came from outside the
/// model, e.g. a `std::io::Error`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum ErrorCause {
    Error(ErrorValue),
    External(String),
}

impl ErrorCause {
    /// Describes a foreign error by its `Display` output.
    pub fn external<E>(error: &E) -> Self
    where
        E: Display + ?Sized,
    {
        Self::External(error.to_string())
    }

    #[inline]
    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Self::Error(e) => Some(e),
            Self::External(_) => None,
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl Display for ErrorCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(e) => Display::fmt(e, f),
            Self::External(descriptor) => f.write_str(descriptor),
        }
    }
}

impl From<ErrorValue> for ErrorCause {
    #[inline]
    fn from(error: ErrorValue) -> Self {
        Self::Error(error)
    }
}

impl From<std::io::Error> for ErrorCause {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::external(&error)
    }
}

impl From<String> for ErrorCause {
    #[inline]
    fn from(descriptor: String) -> Self {
        Self::External(descriptor)
    }
}

impl From<&str> for ErrorCause {
    #[inline]
    fn from(descriptor: &str) -> Self {
        Self::External(descriptor.to_owned())
    }
}

/// Iterator over a cause chain, created by [`ErrorValue::causes`].
pub struct Causes<'a> {
    next: Option<&'a ErrorCause>,
}

impl<'a> Causes<'a> {
    pub(crate) fn new(first: Option<&'a ErrorCause>) -> Self {
        Self { next: first }
    }
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a ErrorCause;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.as_error().and_then(ErrorValue::cause);
        Some(current)
    }
}

impl std::iter::FusedIterator for Causes<'_> {}
