//! Best-effort call-site provenance.
//!
//! Origins are captured with `#[track_caller]`, so the recorded location is the
//! line that constructed the error rather than a line inside this crate. When no
//! location is available, [`Origin::unknown`] renders as an empty string; that is
//! an accepted degradation, not a failure.
use std::borrow::Cow;
use std::fmt::Display;
use std::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Source location (`file:line`) where an error was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
    file: Cow<'static, str>,
    line: u32,
    column: u32,
}

impl Origin {
    /// An origin carrying no location.
    #[inline]
    pub const fn unknown() -> Self {
        Self { file: Cow::Borrowed(""), line: 0, column: 0 }
    }

    /// Builds an origin from explicit coordinates.
    #[inline]
    pub fn new<F>(file: F, line: u32, column: u32) -> Self
    where
        F: Into<Cow<'static, str>>,
    {
        Self { file: file.into(), line, column }
    }

    /// The location of whoever called the `#[track_caller]` chain leading here.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        !self.file.is_empty()
    }
}

impl From<&'static Location<'static>> for Origin {
    #[inline]
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_known() {
            return Ok(());
        }
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Captures the origin of the calling code.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture_origin;
///
/// let origin = capture_origin();
/// assert!(origin.to_string().ends_with(&format!(":{}", line!() - 1)));
/// ```
#[track_caller]
#[inline]
pub fn capture_origin() -> Origin {
    Origin::caller()
}
