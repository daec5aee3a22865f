use outcome_rail::convert::*;
use outcome_rail::{
    validation_error, ContextMap, ErrorCategory, ErrorValue, ErrorVec, LegacyError, Outcome,
    Validation,
};

fn rule(message: &str) -> ErrorValue {
    validation_error(message, ContextMap::new())
}

#[test]
fn to_legacy_validity_matches_the_rich_form() {
    assert_eq!(to_legacy_validity(Ok(())), (true, None));

    let (valid, error) = to_legacy_validity(Err(rule("email is required")));
    assert!(!valid);
    assert_eq!(error.unwrap(), "validation_error: email is required");
}

#[test]
fn to_legacy_errors_keeps_order() {
    let validation = Validation::<ErrorValue, ()>::invalid_many([rule("name is required"), rule("email is required")]);
    let (valid, errors) = to_legacy_errors(validation);

    assert!(!valid);
    assert_eq!(
        errors,
        vec![
            LegacyError::from("validation_error: name is required"),
            LegacyError::from("validation_error: email is required"),
        ]
    );
}

#[test]
fn from_legacy_adapters_pass_strings_through() {
    let legacy = LegacyError::new("anything at all");

    assert_eq!(from_legacy_validation((true, None)), Ok(()));
    assert_eq!(from_legacy_validation((false, Some(legacy.clone()))), Err(legacy.clone()));
    assert_eq!(from_legacy_pair((Some(5), None)), Ok(Some(5)));
    assert_eq!(from_legacy_pair::<u8>((None, Some(legacy.clone()))), Err(legacy.clone()));

    let errors = from_legacy_errors((false, vec![legacy.clone()]));
    assert_eq!(errors.into_pair(), (false, vec![legacy]));
}

#[test]
fn invalid_pair_without_error_stays_invalid() {
    let outcome = from_legacy_validation((false, None));
    assert_eq!(outcome.unwrap_err().as_str(), "");

    let (valid, errors) = from_legacy_errors((false, vec![])).into_pair();
    assert!(!valid);
    assert_eq!(errors, vec![LegacyError::new("")]);

    assert_eq!(from_legacy_pair::<u8>((None, None)), Ok(None));
    assert!(from_legacy_errors((true, vec![])).is_valid());
}

#[test]
fn recorded_legacy_errors_win_over_the_flag() {
    let late = LegacyError::new("validation_error: email is required");
    let (valid, errors) = from_legacy_errors((true, vec![late.clone()])).into_pair();

    assert!(!valid);
    assert_eq!(errors, vec![late]);
}

#[test]
fn validation_and_outcome_convert_both_ways() {
    let invalid = Validation::<ErrorValue, ()>::invalid_many([rule("first"), rule("second")]);
    assert_eq!(validation_to_outcome(invalid).unwrap_err().message(), "first");

    let outcome: Outcome<u8> = Err(rule("only"));
    assert_eq!(outcome_to_validation(outcome).error_count(), 1);
}

#[test]
fn collect_checks_runs_every_check() {
    let checks: Vec<Outcome<()>> = vec![Err(rule("a")), Ok(()), Err(rule("b"))];
    let (valid, errors) = collect_checks(checks).into_pair();

    assert!(!valid);
    assert_eq!(errors.iter().map(ErrorValue::message).collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn empty_hand_built_validation_still_yields_an_error() {
    let empty = Validation::<ErrorValue, u8>::Invalid(ErrorVec::new());
    let err = validation_to_outcome(empty).unwrap_err();

    assert_eq!(err.category(), &ErrorCategory::Validation);
    assert_eq!(err.message(), "validation failed without recorded errors");
    assert!(err.origin().file().ends_with("mod.rs"));
}
