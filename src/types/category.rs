//! Classification tags for [`ErrorValue`](crate::ErrorValue).
//!
//! Four categories are recognized by the named constructors. Anything else must
//! be introduced through [`ErrorCategory::custom`] and documented at the call
//! site that introduces it.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ErrorCategory;
//!
//! assert_eq!(ErrorCategory::Validation.as_str(), "validation_error");
//! assert_eq!(ErrorCategory::from("not_found_error"), ErrorCategory::NotFound);
//! assert!(!ErrorCategory::custom("quota_error").is_recognized());
//! ```
use std::borrow::Cow;
use std::fmt::Display;

/// Closed-ish set of error categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input fails a declared business rule.
    Validation,
    /// A lookup found no matching entity.
    NotFound,
    /// Storage or filesystem failure.
    Io,
    /// Remote-call failure.
    Network,
    /// A category outside the recognized set.
    Custom(Cow<'static, str>),
}

impl ErrorCategory {
    /// Every recognized category, in declaration order.
    pub const RECOGNIZED: [ErrorCategory; 4] = [
        ErrorCategory::Validation,
        ErrorCategory::NotFound,
        ErrorCategory::Io,
        ErrorCategory::Network,
    ];

    /// Builds a category from a tag.
    ///
    /// Tags that name a recognized category resolve to that variant, so
    /// `custom("io_error") == ErrorCategory::Io`.
    pub fn custom<S>(tag: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let tag = tag.into();
        Self::recognized(&tag).unwrap_or(Self::Custom(tag))
    }

    /// Resolves a recognized tag without allocating.
    fn recognized(tag: &str) -> Option<Self> {
        match tag {
            "validation_error" => Some(Self::Validation),
            "not_found_error" => Some(Self::NotFound),
            "io_error" => Some(Self::Io),
            "network_error" => Some(Self::Network),
            _ => None,
        }
    }

    /// Returns the wire tag, e.g. `"validation_error"`.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Validation => "validation_error",
            Self::NotFound => "not_found_error",
            Self::Io => "io_error",
            Self::Network => "network_error",
            Self::Custom(tag) => tag.as_ref(),
        }
    }

    /// Returns `true` for the four categories the named constructors produce.
    #[inline]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns `true` for categories whose constructors accept a wrapped cause.
    #[inline]
    pub fn carries_cause(&self) -> bool {
        matches!(self, Self::Io | Self::Network)
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts borrowed tags of any lifetime; an unrecognized tag is copied.
impl From<&str> for ErrorCategory {
    #[inline]
    fn from(tag: &str) -> Self {
        Self::recognized(tag).unwrap_or_else(|| Self::Custom(Cow::Owned(tag.to_owned())))
    }
}

impl From<Cow<'static, str>> for ErrorCategory {
    #[inline]
    fn from(tag: Cow<'static, str>) -> Self {
        Self::custom(tag)
    }
}

impl From<String> for ErrorCategory {
    #[inline]
    fn from(tag: String) -> Self {
        Self::custom(tag)
    }
}

impl AsRef<str> for ErrorCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ErrorCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::custom(tag))
    }
}
