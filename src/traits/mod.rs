//! Extension traits for working with outcomes.
//!
//! - [`OutcomeExt`]: enrich, wrap, project and log `Outcome<T>` failures
//! - [`LegacyOutcomeExt`]: tuple view of string-only outcomes
//! - [`IntoOutcome`]: lift foreign `Result`s into the rich model
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OutcomeExt};
//! use outcome_rail::{ErrorCategory, Outcome};
//!
//! let outcome: Outcome<i32> = "x1".parse::<i32>().into_outcome(ErrorCategory::Validation);
//! let (value, error) = outcome.context("input", "x1").into_pair();
//! assert!(value.is_none());
//! assert_eq!(error.unwrap().context().len(), 1);
//! ```

pub mod into_outcome;
pub mod result_ext;

pub use into_outcome::IntoOutcome;
pub use result_ext::{LegacyOutcomeExt, OutcomeExt};
