use outcome_rail::{validation_error, ContextMap, ErrorValue, ErrorVec, Validation};

fn rule(message: &str) -> ErrorValue {
    validation_error(message, ContextMap::new())
}

#[test]
fn valid_has_no_errors() {
    let v: Validation<&str, i32> = Validation::valid(5);

    assert!(v.is_valid());
    assert_eq!(v.error_count(), 0);
    assert_eq!(v.iter_errors().count(), 0);
    assert_eq!(v.into_pair(), (true, vec![]));
}

#[test]
fn zip_accumulates_errors_in_order() {
    let left = Validation::<ErrorValue, i32>::invalid(rule("name is required"));
    let right = Validation::<ErrorValue, i32>::invalid_many([rule("email is required"), rule("age")]);

    let (valid, errors) = left.zip(right).into_pair();
    assert!(!valid);
    let messages: Vec<_> = errors.iter().map(ErrorValue::message).collect();
    assert_eq!(messages, vec!["name is required", "email is required", "age"]);
}

#[test]
fn map_and_and_then_skip_invalid() {
    let mut called = false;
    let v = Validation::<&str, i32>::invalid("bad").map(|x| {
        called = true;
        x * 2
    });
    assert!(!called);
    assert_eq!(v.error_count(), 1);

    let chained = Validation::<&str, i32>::valid(2).and_then(|x| Validation::valid(x + 1));
    assert_eq!(chained.into_value(), Some(3));
}

#[test]
fn or_else_can_recover() {
    let recovered = Validation::<&str, i32>::invalid("bad").or_else(|_| Validation::valid(0));
    assert_eq!(recovered, Validation::Valid(0));
}

#[test]
fn map_err_transforms_every_error() {
    let v = Validation::<&str, ()>::invalid_many(["a", "b"]).map_err(str::to_uppercase);
    assert_eq!(v.into_pair(), (false, vec!["A".to_owned(), "B".to_owned()]));
}

#[test]
fn from_errors_is_valid_only_for_an_empty_list() {
    assert!(Validation::<&str, u8>::from_errors(Vec::new(), 1).is_valid());
    assert!(Validation::<&str, u8>::from_errors(vec!["x"], 1).is_invalid());
}

#[test]
fn collecting_validations_keeps_every_error() {
    let all: Validation<&str, Vec<i32>> =
        vec![Validation::invalid("first"), Validation::valid(1), Validation::invalid("second")]
            .into_iter()
            .collect();
    assert_eq!(all.into_errors().map(|e| e.into_vec()), Some(vec!["first", "second"]));

    let clean: Validation<&str, Vec<i32>> =
        vec![Validation::valid(1), Validation::valid(2)].into_iter().collect();
    assert_eq!(clean.into_value(), Some(vec![1, 2]));
}

#[test]
fn result_conversions_preserve_sides() {
    let from_ok: Validation<&str, i32> = Ok(3).into();
    let from_err: Validation<&str, i32> = Err("nope").into();

    assert_eq!(from_ok.to_result(), Ok(3));
    assert_eq!(from_err.to_result().unwrap_err().as_slice(), &["nope"]);
}

#[test]
fn iterators_yield_value_or_nothing() {
    let valid = Validation::<&str, i32>::valid(9);
    assert_eq!(valid.iter().copied().collect::<Vec<_>>(), vec![9]);
    assert_eq!((&valid).into_iter().count(), 1);
    assert_eq!(valid.into_iter().next(), Some(9));

    let invalid = Validation::<&str, i32>::invalid("x");
    assert_eq!(invalid.iter().count(), 0);
    assert_eq!(invalid.iter_errors().copied().collect::<Vec<_>>(), vec!["x"]);
}

#[test]
fn flags_follow_the_error_list_for_hand_built_values() {
    let empty = Validation::<ErrorValue, ()>::Invalid(ErrorVec::new());

    assert!(empty.is_valid());
    assert!(!empty.is_invalid());
    assert_eq!(empty.error_count(), 0);
    assert_eq!(empty.into_pair(), (true, vec![]));
}

#[test]
#[should_panic(expected = "must hold at least one error")]
fn invalid_many_rejects_an_empty_list() {
    let _ = Validation::<&str, ()>::invalid_many(Vec::new());
}
