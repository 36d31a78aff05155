//! Integration tests for `Maybe<T>`.
//!
//! `Maybe` is an optional value:
//! - `Some(T)`: a present value
//! - `None`: no value
//!
//! Every way of reading the payload takes a fallback, so these tests also
//! check that fallbacks and mapping functions only run on the right branch.

#![cfg(feature = "control")]

use base_return::control::{Maybe, Outcome};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn maybe_some_holds_value() {
    let value = Maybe::some(10);
    assert!(value.is_some());
    assert_eq!(value.unwrap_or_else(|| 0), 10);
}

#[rstest]
fn maybe_none_needs_no_default() {
    let value: Maybe<Vec<String>> = Maybe::none();
    assert!(value.is_none());
    assert_eq!(value.unwrap_or_else(Vec::new), Vec::<String>::new());
}

#[rstest]
fn maybe_default_is_none() {
    assert_eq!(Maybe::<i32>::default(), Maybe::none());
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[case(Maybe::some(3), "got 3")]
#[case(Maybe::none(), "nothing")]
fn maybe_fold_runs_one_branch(#[case] value: Maybe<i32>, #[case] expected: &str) {
    let described = value.fold(|n| format!("got {n}"), || "nothing".to_string());
    assert_eq!(described, expected);
}

#[rstest]
fn maybe_fallback_only_runs_for_none() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        -1
    };

    assert_eq!(Maybe::some(5).unwrap_or_else(fallback), 5);
    assert_eq!(calls.get(), 0);

    assert_eq!(Maybe::none().unwrap_or_else(fallback), -1);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Mapping and Chaining
// =============================================================================

#[rstest]
fn maybe_map_chain() {
    let result = Maybe::some("21")
        .map(str::len)
        .map(|length| length * 10)
        .flat_map(|n| if n > 10 { Maybe::some(n) } else { Maybe::none() });
    assert_eq!(result, Maybe::some(20));
}

#[rstest]
fn maybe_flat_map_on_none_skips_function() {
    let calls = Cell::new(0);
    let result: Maybe<i32> = Maybe::<i32>::none().flat_map(|n| {
        calls.set(calls.get() + 1);
        Maybe::some(n)
    });
    assert!(result.is_none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn maybe_flat_map_can_turn_some_into_none() {
    let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    assert_eq!(Maybe::some(8).flat_map(half).flat_map(half), Maybe::some(2));
    assert_eq!(Maybe::some(6).flat_map(half).flat_map(half), Maybe::none());
}

#[rstest]
fn maybe_as_ref_keeps_original() {
    let value = Maybe::some("kept".to_string());
    let length = value.as_ref().map(String::len);
    assert_eq!(length, Maybe::some(4));
    assert_eq!(value, Maybe::some("kept".to_string()));
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn maybe_to_outcome() {
    assert_eq!(Maybe::some(1).to_outcome(|| "absent"), Outcome::succeed(1));
    assert_eq!(Maybe::<i32>::none().to_outcome(|| "absent"), Outcome::fail("absent"));
}

#[rstest]
fn maybe_to_outcome_builds_error_lazily() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, &str> = Maybe::some(1).to_outcome(|| {
        calls.set(calls.get() + 1);
        "absent"
    });
    assert!(outcome.is_success());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn maybe_round_trips_through_option() {
    let option: Option<i32> = Maybe::some(4).into();
    assert_eq!(option, Some(4));
    assert_eq!(Maybe::from(None::<i32>), Maybe::none());
}
