use outcome_rail::{
    make_error, validation_error, ContextMap, ErrorCategory, ErrorCause, ErrorValue,
};
use std::error::Error;

pub mod serde;

#[test]
fn make_error_renders_category_and_message() {
    let err = make_error(
        "validation_error",
        "email is required",
        [("field_name", "email")],
        ContextMap::new(),
        None,
    );

    assert_eq!(err.to_string(), "validation_error: email is required");
    let detailed = err.to_detailed_string();
    let context_at = detailed.find("Context: ").expect("context segment");
    assert!(detailed[context_at..].contains("field_name"));
}

#[test]
fn to_string_is_idempotent() {
    let err = validation_error("email is required", [("field_name", "email")]);

    assert_eq!(err.to_string(), err.to_string());
    assert_eq!(err.to_detailed_string(), err.to_detailed_string());
    assert_eq!(err.timestamp_iso(), err.timestamp_iso());
}

#[test]
fn context_and_metadata_default_to_empty() {
    let err = ErrorValue::new(ErrorCategory::Io, "disk unavailable");

    assert!(err.context().is_empty());
    assert!(err.metadata().is_empty());
    assert!(err.cause().is_none());
}

#[test]
#[should_panic(expected = "message must not be empty")]
fn empty_message_is_a_contract_violation() {
    let _ = ErrorValue::new(ErrorCategory::Validation, "");
}

#[test]
fn enriched_builds_a_new_value_and_leaves_original_untouched() {
    let original = validation_error("invalid email format", [("field_name", "email")]);
    let enriched = original.enriched([("form", "registration"), ("field_name", "contact_email")]);

    assert_eq!(original.context().len(), 1);
    assert_eq!(original.context().get("field_name").and_then(|v| v.as_str()), Some("email"));

    let keys: Vec<_> = enriched.context().keys().collect();
    assert_eq!(keys, vec!["field_name", "form"]);
    assert_eq!(
        enriched.context().get("field_name").and_then(|v| v.as_str()),
        Some("contact_email")
    );
    assert_eq!(enriched.timestamp(), original.timestamp());
    assert_eq!(enriched.origin(), original.origin());
}

#[test]
fn wrap_preserves_lower_error_as_cause() {
    let lower = ErrorValue::new(ErrorCategory::NotFound, "row missing").with_context("id", 7);
    let upper = lower.clone().wrap(ErrorCategory::Io, "loading profile failed");

    assert_eq!(upper.category(), &ErrorCategory::Io);
    assert_eq!(upper.cause(), Some(&ErrorCause::Error(lower.clone())));
    assert!(upper.has_category(&ErrorCategory::NotFound));
    assert!(!upper.has_category(&ErrorCategory::Network));
}

#[test]
fn causes_walks_the_chain_nearest_first() {
    let root = ErrorValue::new(ErrorCategory::Network, "connection reset")
        .with_cause("socket closed by peer");
    let middle = root.wrap(ErrorCategory::Io, "sync failed");
    let top = middle.wrap(ErrorCategory::custom("job_error"), "nightly job aborted");

    let rendered: Vec<String> = top.causes().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["io_error: sync failed", "network_error: connection reset", "socket closed by peer"]
    );
    assert!(top.root_cause().is_some_and(ErrorCause::is_external));
}

#[test]
fn error_source_follows_wrapped_error_values() {
    let lower = ErrorValue::new(ErrorCategory::Io, "write failed");
    let upper = lower.wrap(ErrorCategory::Validation, "profile not saved");

    let source = upper.source().expect("wrapped error exposed as source");
    assert_eq!(source.to_string(), "io_error: write failed");
    assert!(source.source().is_none());
}

#[test]
fn io_error_conversion_keeps_kind_and_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    let err = ErrorValue::from(io);

    assert_eq!(err.category(), &ErrorCategory::Io);
    assert_eq!(err.message(), "config.toml missing");
    assert_eq!(err.metadata().get("io_kind").and_then(|v| v.as_str()), Some("NotFound"));
    assert_eq!(err.cause().map(ToString::to_string).as_deref(), Some("config.toml missing"));
}

#[test]
fn question_mark_converts_io_errors() {
    fn read() -> outcome_rail::Outcome<String> {
        let text = std::fs::read_to_string("/definitely/not/here/outcome-rail.toml")?;
        Ok(text)
    }

    let err = read().unwrap_err();
    assert_eq!(err.category(), &ErrorCategory::Io);
    assert!(err.origin().file().ends_with("mod.rs"));
}

#[test]
fn clones_compare_equal_by_content() {
    let err = validation_error("name is required", [("field_name", "name")]);
    let copy = err.clone();

    assert_eq!(err, copy);
    assert_eq!(copy.to_string(), "validation_error: name is required");
}

#[test]
fn error_values_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorValue>();

    let err = std::sync::Arc::new(validation_error("shared", ContextMap::new()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = std::sync::Arc::clone(&err);
            std::thread::spawn(move || err.to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "validation_error: shared");
    }
}

#[test]
fn boxed_outcome_keeps_the_error_intact() {
    fn load() -> outcome_rail::BoxedOutcome<u8> {
        Err(Box::new(validation_error("name is required", ContextMap::new())))
    }

    assert_eq!(load().unwrap_err().message(), "name is required");
}

#[test]
#[should_panic(expected = "message must not be empty")]
fn named_constructors_reject_empty_messages() {
    let _ = outcome_rail::not_found_error("", ContextMap::new());
}
