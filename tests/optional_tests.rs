//! Unit tests for the `Optional<T>` container.
//!
//! `Optional` holds zero or one value:
//! - `Present(T)`: exactly one value
//! - `Absent`: nothing
//!
//! Only `take`, `take_if` and `replace` change the receiver; every other
//! operation leaves it untouched.

use optres::container::{Optional, Outcome, PanicError};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Queries
// =============================================================================

#[rstest]
fn empty_is_absent() {
    let optional: Optional<i32> = Optional::empty();
    assert!(!optional.is_present());
    assert!(optional.is_absent());
}

#[rstest]
fn of_value_unwraps_to_value() {
    let optional: Optional<i32> = Optional::of(12345);
    assert_eq!(optional.unwrap_or(123), 12345);
}

#[rstest]
fn none_unwraps_to_fallback() {
    let optional: Optional<i32> = Optional::none();
    assert_eq!(optional.unwrap_or(123), 123);
}

#[rstest]
fn of_normalizes_missing_payload() {
    let optional: Optional<String> = Optional::of(None);
    assert!(optional.is_absent());
}

#[rstest]
fn some_keeps_missing_payload_present() {
    let optional: Optional<Option<String>> = Optional::some(None);
    assert!(optional.is_present());
    assert_eq!(optional.unwrap(), None);
}

#[rstest]
fn of_on_nested_none_is_absent() {
    let optional: Optional<Option<String>> = Optional::of(None::<Option<String>>);
    assert!(optional.is_absent());
}

#[rstest]
fn of_on_inner_none_is_present() {
    let optional: Optional<Option<String>> = Optional::of(None::<String>);
    assert!(optional.is_present());
    assert_eq!(optional, Optional::some(None));
}

#[rstest]
fn of_and_some_differ_on_missing_payload() {
    let normalized: Optional<Option<String>> = Optional::of(None::<Option<String>>);
    let kept: Optional<Option<String>> = Optional::some(None);
    assert_ne!(normalized, kept);
}

#[rstest]
#[case(Optional::some(4), true)]
#[case(Optional::some(3), false)]
#[case(Optional::empty(), false)]
fn is_present_and_checks_predicate(#[case] optional: Optional<i32>, #[case] expected: bool) {
    assert_eq!(optional.is_present_and(|n| n % 2 == 0), expected);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_present_applies_function() {
    let optional: Optional<&str> = Optional::some("hello");
    assert_eq!(optional.map(str::len), Optional::some(5));
}

#[rstest]
fn map_absent_yields_typed_absent() {
    let optional: Optional<&str> = Optional::empty();
    let mapped: Optional<usize> = optional.map(str::len);
    assert!(mapped.is_absent());
}

#[rstest]
#[case(Optional::some(2), 4)]
#[case(Optional::empty(), -1)]
fn map_or_uses_fallback_when_absent(#[case] optional: Optional<i32>, #[case] expected: i32) {
    assert_eq!(optional.map_or(-1, |n| n * 2), expected);
}

#[rstest]
fn map_or_else_is_lazy() {
    let calls = Cell::new(0);
    let optional: Optional<i32> = Optional::some(2);
    let value = optional.map_or_else(
        || {
            calls.set(calls.get() + 1);
            0
        },
        |n| n * 2,
    );
    assert_eq!(value, 4);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Chaining Operations
// =============================================================================

#[rstest]
fn and_returns_other_when_present() {
    let optional: Optional<i32> = Optional::some(1);
    assert_eq!(optional.and(Optional::some("b")), Optional::some("b"));
}

#[rstest]
fn and_returns_typed_absent_when_absent() {
    let optional: Optional<i32> = Optional::empty();
    let chained: Optional<&str> = optional.and(Optional::some("b"));
    assert!(chained.is_absent());
}

#[rstest]
fn and_then_present_calls_function() {
    let optional: Optional<i32> = Optional::some(9);
    let chained = optional.and_then(|n| Optional::some(n.to_string()));
    assert_eq!(chained, Optional::some("9".to_string()));
}

#[rstest]
fn and_then_absent_skips_function() {
    let optional: Optional<i32> = Optional::empty();
    let chained: Optional<String> = optional.and_then(|_| panic!("must not be called"));
    assert!(chained.is_absent());
}

// =============================================================================
// Unwrap Operations
// =============================================================================

#[rstest]
fn expect_present_returns_value() {
    let optional: Optional<i32> = Optional::some(3);
    assert_eq!(optional.expect("present"), 3);
}

#[rstest]
fn expect_absent_raises_panic_error_with_message() {
    let optional: Optional<i32> = Optional::empty();
    let error = PanicError::capture(|| optional.expect("user id")).unwrap_err();
    assert_eq!(error.message(), "user id");
}

#[rstest]
fn unwrap_absent_raises_fixed_diagnostic() {
    let optional: Optional<i32> = Optional::empty();
    let error = PanicError::capture(|| optional.unwrap()).unwrap_err();
    assert_eq!(
        error.message(),
        "called `Optional::unwrap()` on an `Absent` value"
    );
}

#[rstest]
fn unwrap_or_else_computes_on_absent() {
    let optional: Optional<String> = Optional::empty();
    assert_eq!(optional.unwrap_or_else(|| "computed".to_string()), "computed");
}

#[rstest]
fn unwrap_or_default_on_absent_is_default() {
    let optional: Optional<Vec<i32>> = Optional::empty();
    assert_eq!(optional.unwrap_or_default(), Vec::<i32>::new());

    let optional: Optional<Vec<i32>> = Optional::some(vec![1]);
    assert_eq!(optional.unwrap_or_default(), vec![1]);
}

// =============================================================================
// Inspection
// =============================================================================

#[rstest]
fn inspect_is_identity_passthrough() {
    let seen = Cell::new(0);
    let optional: Optional<i32> = Optional::some(7);
    let result = optional.inspect(|n| seen.set(*n));
    assert_eq!(result, Optional::some(7));
    assert_eq!(seen.get(), 7);
}

#[rstest]
fn inspect_on_absent_is_not_called() {
    let optional: Optional<i32> = Optional::empty();
    let result = optional.inspect(|_| panic!("must not be called"));
    assert!(result.is_absent());
}

// =============================================================================
// Fallback Operations
// =============================================================================

#[rstest]
#[case(Optional::some(1), Optional::some(2), Optional::some(1))]
#[case(Optional::empty(), Optional::some(2), Optional::some(2))]
#[case(Optional::some(1), Optional::empty(), Optional::some(1))]
#[case(Optional::empty(), Optional::empty(), Optional::empty())]
fn or_prefers_self(
    #[case] left: Optional<i32>,
    #[case] right: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(left.or(right), expected);
}

#[rstest]
fn or_else_only_called_when_absent() {
    let optional: Optional<i32> = Optional::some(1);
    assert_eq!(
        optional.or_else(|| panic!("must not be called")),
        Optional::some(1)
    );

    let optional: Optional<i32> = Optional::empty();
    assert_eq!(optional.or_else(|| Optional::some(5)), Optional::some(5));
}

#[rstest]
#[case(Optional::some(1), Optional::empty(), Optional::some(1))]
#[case(Optional::empty(), Optional::some(2), Optional::some(2))]
#[case(Optional::some(1), Optional::some(2), Optional::empty())]
#[case(Optional::empty(), Optional::empty(), Optional::empty())]
fn xor_keeps_exactly_one(
    #[case] left: Optional<i32>,
    #[case] right: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(left.xor(right), expected);
}

// =============================================================================
// In-place Mutation
// =============================================================================

#[rstest]
fn take_empties_the_slot() {
    let mut slot: Optional<String> = Optional::some("value".to_string());
    assert_eq!(slot.take(), Optional::some("value".to_string()));
    assert!(slot.is_absent());
}

#[rstest]
fn take_on_absent_stays_absent() {
    let mut slot: Optional<String> = Optional::empty();
    assert!(slot.take().is_absent());
    assert!(slot.is_absent());
}

#[rstest]
fn take_if_rejected_keeps_value() {
    let mut slot: Optional<i32> = Optional::some(3);
    assert!(slot.take_if(|n| *n > 5).is_absent());
    assert_eq!(slot, Optional::some(3));
}

#[rstest]
fn take_if_accepted_takes_value() {
    let mut slot: Optional<i32> = Optional::some(7);
    assert_eq!(slot.take_if(|n| *n > 5), Optional::some(7));
    assert!(slot.is_absent());
}

#[rstest]
fn take_if_on_absent_does_not_call_predicate() {
    let mut slot: Optional<i32> = Optional::empty();
    let taken = slot.take_if(|_| panic!("must not be called"));
    assert!(taken.is_absent());
}

#[rstest]
fn replace_returns_previous_contents() {
    let mut slot: Optional<i32> = Optional::empty();
    assert_eq!(slot.replace(1), Optional::empty());
    assert_eq!(slot.replace(2), Optional::some(1));
    assert_eq!(slot, Optional::some(2));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn ok_or_bridges_to_outcome() {
    let present: Optional<i32> = Optional::some(1);
    let absent: Optional<i32> = Optional::empty();
    assert_eq!(present.ok_or("missing"), Outcome::ok(1));
    assert_eq!(absent.ok_or("missing"), Outcome::err("missing"));
}

#[rstest]
fn ok_or_else_is_lazy() {
    let present: Optional<i32> = Optional::some(1);
    let outcome: Outcome<i32, String> = present.ok_or_else(|| panic!("must not be called"));
    assert_eq!(outcome, Outcome::ok(1));
}

#[rstest]
fn into_option_matches_state() {
    let present: Optional<i32> = Optional::some(1);
    let absent: Optional<i32> = Optional::empty();
    assert_eq!(present.into_option(), Some(1));
    assert_eq!(absent.into_option(), None);
}
