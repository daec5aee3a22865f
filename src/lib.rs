//! Structured error values, outcome combinators and a legacy string bridge.
//!
//! Every fallible operation returns an [`Outcome<T>`], a `Result` whose error arm
//! is a rich [`ErrorValue`]: category, message, ordered context and metadata,
//! capture timestamp, call-site origin and an optional wrapped cause. Older call
//! sites that only understand strings get the [`LegacyError`] projection
//! `"<category>: <message>"`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Rich Error with Context
//!
//! ```
//! use outcome_rail::{context_map, validation_error};
//!
//! let err = validation_error("email is required", context_map! { "field_name" => "email" });
//!
//! assert_eq!(err.to_string(), "validation_error: email is required");
//! assert!(err.to_detailed_string().contains("Context: {\"field_name\": \"email\"}"));
//! ```
//!
//! ## Short-Circuit Chaining
//!
//! ```
//! use outcome_rail::{validation_error, ContextMap, Outcome};
//!
//! fn validate(email: &str) -> Outcome<&str> {
//!     if email.contains('@') {
//!         Ok(email)
//!     } else {
//!         Err(validation_error("invalid email format", ContextMap::new()))
//!     }
//! }
//!
//! let mut saved = false;
//! let result = validate("nope").and_then(|email| {
//!     saved = true;
//!     Ok(email.len())
//! });
//!
//! assert!(result.is_err());
//! assert!(!saved);
//! ```
//!
//! ## Collecting Every Failure
//!
//! ```
//! use outcome_rail::{validation_error, ContextMap, ErrorCollector};
//!
//! let mut errors = ErrorCollector::new();
//! errors.require(false, || validation_error("name is required", ContextMap::new()));
//! errors.require(false, || validation_error("email is required", ContextMap::new()));
//!
//! let (valid, errors) = errors.finish().into_pair();
//! assert!(!valid);
//! assert_eq!(errors.len(), 2);
//! ```

/// Named constructors for the recognized categories
pub mod constructors;
/// Conversions between rich, legacy and multi-error outcomes
pub mod convert;
/// Macros for context maps and early failure returns
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for outcomes
pub mod traits;
/// ErrorValue, LegacyError and the context containers
pub mod types;
/// Validation type for error accumulation
pub mod validation;

pub use constructors::*;
pub use traits::*;
pub use types::{
    capture_origin, error_formatter::DetailFormat, BoxedOutcome, ContextMap, ContextValue,
    ErrorCategory, ErrorCause, ErrorCollector, ErrorValue, ErrorVec, LegacyError, LegacyOutcome,
    Origin, Outcome, Validity,
};
pub use validation::Validation;
