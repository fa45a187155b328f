//! The error raised when an unwrap-family accessor is misused.

use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    // The most recent `PanicError` raised on this thread and not yet captured.
    static RAISED: Cell<Option<PanicError>> = const { Cell::new(None) };
}

/// A contract violation raised by an unwrap-family accessor.
///
/// Calling [`Optional::unwrap`](super::Optional::unwrap) on an absent
/// container, or [`Outcome::expect`](super::Outcome::expect) on a failure,
/// panics with the `PanicError` message as a `String` payload, so the
/// default panic hook and `#[should_panic(expected = ..)]` both see it. The
/// message is either the one supplied to an `expect*` method or a fixed
/// diagnostic.
///
/// This is not a recoverable error path. Use [`PanicError::capture`] only at
/// boundaries that must report the violation instead of unwinding further.
///
/// # Examples
///
/// ```rust
/// use optres::container::{Optional, PanicError};
///
/// let absent: Optional<i32> = Optional::empty();
/// let error = PanicError::capture(|| absent.expect("config value")).unwrap_err();
/// assert_eq!(error.message(), "config value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicError {
    message: Cow<'static, str>,
}

impl PanicError {
    /// Creates a new `PanicError` carrying `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the diagnostic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Panics with `message` as the payload, recording the typed error for
    /// [`PanicError::capture`].
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(crate) fn raise(message: impl Into<Cow<'static, str>>) -> ! {
        let error = Self::new(message);
        let rendered = error.message.clone().into_owned();
        RAISED.with(|slot| slot.set(Some(error)));
        panic::panic_any(rendered)
    }

    /// Runs `operation`, turning a `PanicError` panic into an `Err`.
    ///
    /// Only panics raised by an unwrap-family accessor are converted. Any
    /// other panic is resumed unchanged.
    ///
    /// # Errors
    ///
    /// Returns the `PanicError` raised by `operation`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::{Outcome, PanicError};
    ///
    /// let success: Outcome<i32> = Outcome::ok(7);
    /// assert_eq!(PanicError::capture(|| success.unwrap()), Ok(7));
    /// ```
    pub fn capture<R, F>(operation: F) -> Result<R, Self>
    where
        F: FnOnce() -> R,
    {
        RAISED.with(Cell::take);
        match panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Ok(value),
            Err(payload) => match RAISED.with(Cell::take) {
                Some(error)
                    if payload
                        .downcast_ref::<String>()
                        .is_some_and(|message| *message == error.message) =>
                {
                    Err(error)
                }
                _ => panic::resume_unwind(payload),
            },
        }
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for PanicError {}
