//! Validation types and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, the multi-error outcome shape.
//! Where every failed rule should be reported rather than only the first, checks
//! run through an [`ErrorCollector`](crate::ErrorCollector) or are combined with
//! [`Validation::zip`] / `collect()`, and the result is read back as
//! `(valid, errors)` with [`Validation::into_pair`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
