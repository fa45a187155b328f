//! Outcome type - a success value or a carried error.
//!
//! This module provides `Outcome<T, E>`, which is either `Ok(T)` or `Err(E)`.
//! The error type defaults to the opaque [`Error`], so `Outcome<T>` reads as
//! "a `T` or some error".
//!
//! `Outcome` has no in-place mutation: every combinator consumes or borrows
//! the receiver and produces an independent value.
//!
//! # Examples
//!
//! ```rust
//! use optres::container::{Error, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     input.parse::<i32>().map_err(Error::from).into()
//! }
//!
//! assert_eq!(parse("21").map(|n| n * 2).unwrap(), 42);
//! assert_eq!(parse("x").map(|n| n * 2).unwrap_or(0), 0);
//! ```

use std::fmt;

use super::error::Error;
use super::optional::Optional;
use super::panic::PanicError;

const UNWRAP_ERR: &str = "called `Outcome::unwrap()` on an `Err` value";
const UNWRAP_ERR_ON_OK: &str = "called `Outcome::unwrap_err()` on an `Ok` value";

/// A success value or an error.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the carried error, [`Error`] by default
///
/// # Examples
///
/// ```rust
/// use optres::container::Outcome;
///
/// let success: Outcome<i32> = Outcome::ok(12345);
/// assert!(success.is_ok());
/// assert_eq!(success.unwrap(), 12345);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = Error> {
    /// The success variant.
    Ok(T),
    /// The failure variant, carrying an error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Creates an outcome from a value and an optional error.
    ///
    /// A present error is authoritative and `value` is dropped. Otherwise the
    /// outcome is a success holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::new(1, None);
    /// assert_eq!(success, Outcome::ok(1));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::new(1, Some("denied"));
    /// assert_eq!(failure, Outcome::err("denied"));
    /// ```
    #[inline]
    pub fn new(value: T, error: Option<E>) -> Self {
        match error {
            Some(error) => Self::Err(error),
            None => Self::Ok(value),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is a success whose value matches `predicate`.
    #[inline]
    pub fn is_ok_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is a failure whose error matches `predicate`.
    ///
    /// The predicate is only called on a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("timeout");
    /// assert!(failure.is_err_and(|e| e.starts_with("time")));
    /// assert!(!failure.is_err_and(|e| e.is_empty()));
    ///
    /// let success: Outcome<i32, &str> = Outcome::ok(1);
    /// assert!(!success.is_err_and(|_| true));
    /// ```
    #[inline]
    pub fn is_err_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Returns `true` on any failure, otherwise the answer of `predicate`.
    ///
    /// On a failure the predicate is not called. On a success it is called
    /// with `None`, since there is no error to examine. This keeps the
    /// behavior of the older `is_err_and` contract for callers that rely on
    /// it; prefer [`Outcome::is_err_and`] in new code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("timeout");
    /// assert!(failure.is_err_or(|_| false));
    ///
    /// let success: Outcome<i32, &str> = Outcome::ok(1);
    /// assert!(success.is_err_or(|error| error.is_none()));
    /// assert!(!success.is_err_or(|_| false));
    /// ```
    #[inline]
    pub fn is_err_or<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(Option<&E>) -> bool,
    {
        match self {
            Self::Ok(_) => predicate(None),
            Self::Err(_) => true,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps the success value, passing an error through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::ok(2);
    /// assert_eq!(success.map(|n| n.to_string()), Outcome::ok("2".to_string()));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("bad");
    /// assert_eq!(failure.map(|n| n.to_string()), Outcome::err("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `function(v)` on success, otherwise `fallback`.
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => fallback,
        }
    }

    /// Returns `function(v)` on success, otherwise `fallback(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("bad");
    /// let text = failure.map_or_else(|e| format!("error: {e}"), |n| n.to_string());
    /// assert_eq!(text, "error: bad");
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => fallback(error),
        }
    }

    /// Maps the error, passing a success through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("bad");
    /// assert_eq!(failure.map_err(str::len), Outcome::err(3));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Returns `other` on success, otherwise this error re-typed for `U`.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Calls `function` with the success value and returns its result.
    ///
    /// A failure propagates without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let checked_half = |n: i32| {
    ///     if n % 2 == 0 { Outcome::ok(n / 2) } else { Outcome::err("odd") }
    /// };
    /// assert_eq!(Outcome::<i32, &str>::ok(8).and_then(checked_half), Outcome::ok(4));
    /// assert_eq!(Outcome::<i32, &str>::ok(3).and_then(checked_half), Outcome::err("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with a [`PanicError`] carrying `message` on a failure.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => PanicError::raise(message.to_owned()),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with a [`PanicError`] carrying a fixed diagnostic on a failure.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => PanicError::raise(UNWRAP_ERR),
        }
    }

    /// Returns the carried error.
    ///
    /// # Panics
    ///
    /// Panics with a [`PanicError`] carrying `message` on a success.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => PanicError::raise(message.to_owned()),
            Self::Err(error) => error,
        }
    }

    /// Returns the carried error.
    ///
    /// # Panics
    ///
    /// Panics with a [`PanicError`] carrying a fixed diagnostic on a success.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => PanicError::raise(UNWRAP_ERR_ON_OK),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => function(),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Calls `function` with the success value, if any, and returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the carried error, if any, and returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let failure: Outcome<i32, &str> = Outcome::err("refused");
    /// let _ = failure.inspect(|_| log.push("ok")).inspect_err(|e| log.push(*e));
    /// assert_eq!(log, vec!["refused"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns `self` on success, otherwise `other`.
    #[inline]
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns `self` on success, otherwise calls `function` with the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("cache miss");
    /// let recovered: Outcome<i32, &str> = failure.or_else(|_| Outcome::ok(0));
    /// assert_eq!(recovered, Outcome::ok(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Views and Conversions
    // =========================================================================

    /// Borrows the success value or the error.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts the success value into an [`Optional`], discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::{Optional, Outcome};
    ///
    /// let success: Outcome<i32, &str> = Outcome::ok(1);
    /// assert_eq!(success.into_ok(), Optional::some(1));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("bad");
    /// assert_eq!(failure.into_ok(), Optional::empty());
    /// ```
    #[inline]
    pub fn into_ok(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Present(value),
            Self::Err(_) => Optional::Absent,
        }
    }

    /// Converts the error into an [`Optional`], discarding any success.
    #[inline]
    pub fn into_err(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::Absent,
            Self::Err(error) => Optional::Present(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<U, E> Outcome<Option<U>, E> {
    /// Returns `true` if this is a success whose payload is itself present.
    ///
    /// A success holding `None` is still a success, distinct from a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    ///
    /// let filled: Outcome<Option<i32>, &str> = Outcome::ok(Some(1));
    /// let hollow: Outcome<Option<i32>, &str> = Outcome::ok(None);
    /// assert!(filled.is_ok_and_some());
    /// assert!(hollow.is_ok());
    /// assert!(!hollow.is_ok_and_some());
    /// ```
    #[inline]
    pub const fn is_ok_and_some(&self) -> bool {
        matches!(self, Self::Ok(Some(_)))
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` on a failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
