//! Ergonomic macros for building context maps and returning failures.
//!
//! - [`macro@crate::context_map`] - Builds an ordered [`ContextMap`](crate::ContextMap)
//!   from `key => value` pairs.
//! - [`macro@crate::fail`] - Returns `Err(ErrorValue)` from the enclosing function,
//!   recording the macro's call site as the origin.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{context_map, fail, ErrorCategory, Outcome};
//!
//! fn find(users: &[&str], email: &str) -> Outcome<usize> {
//!     match users.iter().position(|u| *u == email) {
//!         Some(index) => Ok(index),
//!         None => fail!(
//!             ErrorCategory::NotFound,
//!             "user not found";
//!             context_map! { "total_users_searched" => users.len() }
//!         ),
//!     }
//! }
//!
//! let err = find(&["alice@example.com"], "bob@example.com").unwrap_err();
//! assert_eq!(err.context().get("total_users_searched").and_then(|v| v.as_i64()), Some(1));
//! ```

/// Builds a [`ContextMap`](crate::ContextMap) from `key => value` pairs, in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::context_map;
///
/// let map = context_map! { "field_name" => "email", "length" => 0 };
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["field_name", "length"]);
///
/// let empty = context_map! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! context_map {
    () => {
        $crate::ContextMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ContextMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}

/// Returns early with `Err(ErrorValue)`.
///
/// # Syntax
///
/// - `fail!(category, "message")`
/// - `fail!(category, "format {}", args)`
/// - `fail!(category, "message"; context_map)` - attaches a context map
///
/// # Panics
///
/// Panics if the message is empty.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, ErrorCategory, Outcome};
///
/// fn check_age(age: u32) -> Outcome<u32> {
///     if age < 18 {
///         fail!(ErrorCategory::Validation, "age {} is below the minimum", age);
///     }
///     Ok(age)
/// }
///
/// assert_eq!(
///     check_age(12).unwrap_err().to_string(),
///     "validation_error: age 12 is below the minimum"
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($category:expr, $message:expr; $context:expr) => {
        return ::core::result::Result::Err(
            $crate::ErrorValue::new($category, $message).with_contexts($context),
        )
    };
    ($category:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err($crate::ErrorValue::new($category, format!($($arg)+)))
    };
}
