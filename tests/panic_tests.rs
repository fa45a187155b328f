//! Tests for the contract-violation channel.
//!
//! Unwrap-family misuse panics with the diagnostic as a `String` payload, so
//! the default panic hook prints it. These tests check the raw payload through
//! `catch_unwind`, the typed error through `PanicError::capture`, and that
//! correct use never panics.

use optres::container::{Error, Optional, Outcome, PanicError};
use rstest::rstest;
use std::panic;

fn message_of<R>(operation: impl FnOnce() -> R + panic::UnwindSafe) -> String {
    let payload = panic::catch_unwind(operation).err().expect("operation should panic");
    *payload
        .downcast::<String>()
        .expect("payload should be the diagnostic text")
}

#[rstest]
fn optional_unwrap_payload_is_diagnostic_text() {
    let message = message_of(|| Optional::<i32>::empty().unwrap());
    assert_eq!(message, "called `Optional::unwrap()` on an `Absent` value");
}

#[rstest]
fn outcome_expect_payload_carries_message() {
    let message = message_of(|| Outcome::<i32, &str>::err("e").expect("msg"));
    assert_eq!(message, "msg");
}

#[rstest]
fn capture_rebuilds_typed_error() {
    let success: Outcome<i32, &str> = Outcome::ok(1);
    let error = PanicError::capture(|| success.unwrap_err()).unwrap_err();
    assert_eq!(error, PanicError::new("called `Outcome::unwrap_err()` on an `Ok` value"));
}

#[rstest]
fn correct_use_never_panics() {
    let present: Optional<i32> = Optional::some(1);
    let success: Outcome<i32> = Outcome::ok(2);
    let failure: Outcome<i32> = Outcome::err(Error::msg("e"));

    assert_eq!(PanicError::capture(|| present.unwrap()), Ok(1));
    assert_eq!(PanicError::capture(|| success.unwrap()), Ok(2));
    assert_eq!(PanicError::capture(|| failure.unwrap_err().to_string()), Ok("e".to_string()));
}

#[rstest]
fn panic_error_is_a_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(PanicError::new("contract"));
    assert_eq!(error.to_string(), "contract");
}

#[rstest]
#[should_panic(expected = "called `Optional::unwrap()` on an `Absent` value")]
fn unwrap_absent_reports_diagnostic_without_capture() {
    let absent: Optional<i32> = Optional::empty();
    let _ = absent.unwrap();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value")]
fn unwrap_err_state_reports_diagnostic_without_capture() {
    let failure: Outcome<i32, &str> = Outcome::err("refused");
    let _ = failure.unwrap();
}

#[rstest]
#[should_panic(expected = "config value")]
fn expect_reports_caller_message_without_capture() {
    let absent: Optional<u16> = Optional::empty();
    let _ = absent.expect("config value");
}
