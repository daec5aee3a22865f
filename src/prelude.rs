//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn validate_email(email: &str) -> Outcome<()> {
//!     if email.is_empty() {
//!         return Err(validation_error("email is required", context_map! { "field_name" => "email" }));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(
//!     validate_email("").to_legacy().unwrap_err(),
//!     "validation_error: email is required"
//! );
//! ```

// Macros
pub use crate::{context_map, fail};

// Core types
pub use crate::types::{
    ContextMap, ContextValue, ErrorCategory, ErrorCause, ErrorCollector, ErrorValue, LegacyError,
    LegacyOutcome, Outcome, Validity,
};
pub use crate::validation::Validation;

// Constructors
pub use crate::constructors::{
    io_error, make_error, network_error, not_found_error, validation_error,
};

// Traits
pub use crate::traits::{IntoOutcome, LegacyOutcomeExt, OutcomeExt};
