//! Error types and utilities.
//!
//! This module provides the data model: the rich [`ErrorValue`], its plain
//! [`LegacyError`] projection, the context containers, and the result aliases
//! built on them.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorCategory, ErrorValue, Outcome};
//!
//! fn load(id: u32) -> Outcome<String> {
//!     Err(ErrorValue::new(ErrorCategory::NotFound, "record not found").with_context("id", id))
//! }
//!
//! let err = load(7).unwrap_err();
//! assert_eq!(err.to_string(), "not_found_error: record not found");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod category;
pub mod context_map;
pub mod context_value;
pub mod error_formatter;
pub mod error_value;
pub mod legacy;
pub mod origin;
pub mod validity;

pub use accumulator::*;
pub use category::*;
pub use context_map::*;
pub use context_value::*;
pub use error_value::*;
pub use legacy::*;
pub use origin::*;
pub use validity::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element, the common case for a failed
/// validation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias carrying an [`ErrorValue`] on failure.
pub type Outcome<T> = Result<T, ErrorValue>;

/// Result alias carrying a [`LegacyError`] string on failure.
pub type LegacyOutcome<T> = Result<T, LegacyError>;

/// Boxed [`ErrorValue`] for reduced stack size.
pub type BoxedErrorValue = Box<ErrorValue>;

/// Result alias with a boxed [`ErrorValue`].
pub type BoxedOutcome<T> = Result<T, BoxedErrorValue>;
