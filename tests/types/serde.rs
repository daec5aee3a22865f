#![cfg(feature = "serde")]

use outcome_rail::{
    context_map, io_error, ContextMap, ErrorCategory, ErrorValue, LegacyError, Validation,
};

#[test]
fn error_value_round_trips_through_json() {
    let err = io_error(
        "failed to persist user",
        context_map! { "path" => "/var/users", "attempt" => 2 },
        Some("disk full".into()),
    )
    .with_metadata("retry", false);

    let json = serde_json::to_string(&err).unwrap();
    let back: ErrorValue = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
}

#[test]
fn categories_serialize_as_tags() {
    let json = serde_json::to_value(ErrorCategory::NotFound).unwrap();
    assert_eq!(json, serde_json::json!("not_found_error"));

    let custom: ErrorCategory = serde_json::from_str("\"quota_error\"").unwrap();
    assert_eq!(custom, ErrorCategory::custom("quota_error"));
}

#[test]
fn context_maps_keep_key_order() {
    let map = context_map! { "zeta" => 1, "alpha" => 2, "mid" => "x" };
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":2,"mid":"x"}"#);

    let back: ContextMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn legacy_errors_serialize_as_plain_strings() {
    let json = serde_json::to_string(&LegacyError::new("io_error: disk full")).unwrap();
    assert_eq!(json, "\"io_error: disk full\"");
}

#[test]
fn validation_serializes_its_errors() {
    let invalid: Validation<&str, ()> = Validation::invalid("boom");
    let json = serde_json::to_value(&invalid).unwrap();
    assert_eq!(json, serde_json::json!({ "Invalid": ["boom"] }));
}

#[test]
fn empty_message_is_rejected_on_deserialize() {
    let json = r#"{"category":"validation_error","message":"","timestamp":"2024-01-01T00:00:00Z"}"#;
    let err = serde_json::from_str::<ErrorValue>(json).unwrap_err();

    assert!(err.to_string().contains("message must not be empty"));
}

#[test]
fn optional_fields_default_on_deserialize() {
    let json = r#"{"category":"not_found_error","message":"user not found","timestamp":"2024-01-01T00:00:00Z"}"#;
    let err: ErrorValue = serde_json::from_str(json).unwrap();

    assert_eq!(err.to_string(), "not_found_error: user not found");
    assert!(err.context().is_empty());
    assert!(!err.origin().is_known());
    assert!(err.cause().is_none());
}

#[test]
fn empty_invalid_validation_is_rejected_on_deserialize() {
    let rejected = serde_json::from_str::<Validation<String, ()>>(r#"{"Invalid":[]}"#);
    assert!(rejected.unwrap_err().to_string().contains("at least one error"));

    let accepted: Validation<String, ()> = serde_json::from_str(r#"{"Invalid":["boom"]}"#).unwrap();
    assert_eq!(accepted.into_pair(), (false, vec!["boom".to_owned()]));

    let valid: Validation<String, u8> = serde_json::from_str(r#"{"Valid":3}"#).unwrap();
    assert_eq!(valid.into_value(), Some(3));
}
