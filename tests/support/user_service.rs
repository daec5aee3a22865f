//! User validation, creation and lookup built on the outcome model.

use outcome_rail::convert::{to_legacy_errors, to_legacy_validity};
use outcome_rail::prelude::*;
use outcome_rail::ErrorVec;

pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: &str, email: &str) -> Self {
        Self { id, name: name.to_owned(), email: email.to_owned() }
    }
}

/// Fail-fast email check.
pub fn validate_email(email: &str) -> Outcome<()> {
    if email.is_empty() {
        return Err(validation_error(
            "email is required",
            context_map! { "field_name" => "email" },
        )
        .with_metadata("rule", "required"));
    }
    if !email.contains('@') {
        return Err(validation_error(
            "invalid email format",
            context_map! { "field_name" => "email", "input" => email },
        )
        .with_metadata("rule", "format")
        .with_metadata("expected_format", "local@domain"));
    }
    Ok(())
}

/// `(valid, error string)` form of [`validate_email`].
pub fn validate_email_legacy(email: &str) -> (bool, Option<LegacyError>) {
    to_legacy_validity(validate_email(email))
}

/// Runs every user rule and reports all failures in declaration order.
pub fn validate_user_data(name: &str, email: &str) -> Validation {
    let mut errors = ErrorCollector::new();

    errors.require(!name.trim().is_empty(), || {
        validation_error("name is required", context_map! { "field_name" => "name" })
    });
    errors.require(name.chars().count() <= MAX_NAME_LEN, || {
        validation_error(
            format!("name must be {MAX_NAME_LEN} characters or less"),
            context_map! { "field_name" => "name", "length" => name.chars().count() },
        )
        .with_metadata("max_length", MAX_NAME_LEN)
    });
    errors.check(validate_email(email));

    errors.finish()
}

/// `(valid, error strings)` form of [`validate_user_data`].
pub fn validate_user_data_legacy(name: &str, email: &str) -> (bool, Vec<LegacyError>) {
    to_legacy_errors(validate_user_data(name, email))
}

/// Validates and builds a user with a trimmed name and lowercased email.
pub fn create_user(name: &str, email: &str) -> Outcome<User> {
    match validate_user_data(name, email) {
        Validation::Valid(()) => Ok(User::new(1, name.trim(), &email.to_lowercase())),
        Validation::Invalid(errors) => {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            let first = errors.into_iter().next();
            let error = ErrorValue::new(
                ErrorCategory::Validation,
                format!("user creation failed: {}", messages.join(", ")),
            )
            .with_context("error_count", messages.len())
            .with_metadata("errors", messages);
            Err(match first {
                Some(first) => error.with_cause(first),
                None => error,
            })
        }
    }
}

/// Looks a user up by email after validating it.
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Outcome<&'a User> {
    validate_email(email)?;

    let normalized = email.to_lowercase();
    users.iter().find(|user| user.email == normalized).ok_or_else(|| {
        let known: Vec<&str> = users.iter().map(|user| user.email.as_str()).collect();
        not_found_error(
            "user not found",
            context_map! { "email" => normalized.as_str(), "total_users_searched" => users.len() },
        )
        .with_metadata("searched_emails", known)
    })
}

/// Creates every user or stops at the first failure, recording its index.
pub fn create_multiple_users(entries: &[(&str, &str)]) -> Outcome<Vec<User>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, (name, email))| {
            create_user(name, email).context("index", index).context("batch_size", entries.len())
        })
        .collect()
}

/// Registration pipeline: email check, full validation, then creation.
///
/// `on_create` observes the creation step so callers can verify it never runs
/// after an earlier failure.
pub fn process_user_registration<F>(name: &str, email: &str, mut on_create: F) -> Outcome<User>
where
    F: FnMut(&str, &str),
{
    validate_email(email)
        .and_then(|()| validate_user_data(name, email).to_result().map_err(first_error))
        .and_then(|()| {
            on_create(name, email);
            create_user(name, email)
        })
}

fn first_error(errors: ErrorVec<ErrorValue>) -> ErrorValue {
    let count = errors.len();
    match errors.into_iter().next() {
        Some(error) => error.with_context("error_count", count),
        None => ErrorValue::new(ErrorCategory::Validation, "validation failed"),
    }
}
