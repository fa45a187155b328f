//! Optional type - a slot holding zero or one value.
//!
//! This module provides the `Optional<T>` type, which is either `Present(T)`
//! or `Absent`. The absent state is an explicit variant rather than a null
//! reference, so "absent" is never confused with "present but empty": an
//! `Optional<Option<i32>>` holding `Present(None)` is present.
//!
//! Every operation except [`Optional::take`], [`Optional::take_if`] and
//! [`Optional::replace`] leaves the receiver untouched and produces a new
//! container or a derived value.
//!
//! # Examples
//!
//! ```rust
//! use optres::container::Optional;
//!
//! let port: Optional<u16> = Optional::of(8080);
//! let label = port.map_or("unset".to_string(), |p| format!(":{p}"));
//! assert_eq!(label, ":8080");
//!
//! let mut slot: Optional<String> = Optional::some("token".to_string());
//! let taken = slot.take();
//! assert!(taken.is_present());
//! assert!(slot.is_absent());
//! ```

use std::fmt;

use super::outcome::Outcome;
use super::panic::PanicError;

const UNWRAP_ABSENT: &str = "called `Optional::unwrap()` on an `Absent` value";

/// A slot that either holds exactly one value or nothing.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use optres::container::Optional;
///
/// let present: Optional<i32> = Optional::of(12345);
/// assert_eq!(present.unwrap_or(123), 12345);
///
/// let absent: Optional<i32> = Optional::none();
/// assert_eq!(absent.unwrap_or(123), 123);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an absent container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let absent: Optional<i32> = Optional::empty();
    /// assert!(absent.is_absent());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Creates an absent container. Alias for [`Optional::empty`].
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Creates a container from a possibly missing value.
    ///
    /// `None` normalizes to `Absent`; anything else is `Present`.
    ///
    /// Only the outermost `Option` is normalized. For a nested payload
    /// type, annotate which `None` is meant: `None::<Option<U>>` is absent,
    /// while `None::<U>` becomes the present value `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::of(7);
    /// assert!(present.is_present());
    ///
    /// let absent: Optional<i32> = Optional::of(None);
    /// assert!(absent.is_absent());
    /// ```
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: Into<Option<T>>,
    {
        match value.into() {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Creates a present container, without normalizing the payload.
    ///
    /// Unlike [`Optional::of`], a payload that is itself empty still yields
    /// a present container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let present: Optional<Option<i32>> = Optional::some(None);
    /// assert!(present.is_present());
    ///
    /// let normalized: Optional<Option<i32>> = Optional::of(None::<Option<i32>>);
    /// assert!(normalized.is_absent());
    ///
    /// let inner: Optional<Option<i32>> = Optional::of(None::<i32>);
    /// assert_eq!(inner, Optional::some(None));
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present and matches `predicate`.
    ///
    /// The predicate is not called on an absent container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::of(4);
    /// assert!(present.is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::<i32>::empty().is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// Returns `Present(function(v))` for `Present(v)` and a typed `Absent`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let present: Optional<&str> = Optional::of("hello");
    /// assert_eq!(present.map(str::len), Optional::some(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `function(v)` if present, otherwise `fallback`.
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => fallback,
        }
    }

    /// Returns `function(v)` if present, otherwise computes `fallback()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let absent: Optional<i32> = Optional::empty();
    /// assert_eq!(absent.map_or_else(|| -1, |n| n * 2), -1);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => fallback(),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Returns `other` if a value is present, otherwise a typed `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::of(1);
    /// assert_eq!(present.and(Optional::some("next")), Optional::some("next"));
    ///
    /// let absent: Optional<i32> = Optional::empty();
    /// assert_eq!(absent.and(Optional::some("next")), Optional::empty());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Calls `function` with the contained value and returns its result.
    ///
    /// An absent container yields a typed `Absent` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::some(n / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::<i32>::of(8).and_then(half), Optional::some(4));
    /// assert_eq!(Optional::<i32>::of(3).and_then(half), Optional::empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with a [`PanicError`] carrying `message` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let present: Optional<i32> = Optional::of(3);
    /// assert_eq!(present.expect("value should be set"), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => PanicError::raise(message.to_owned()),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with a [`PanicError`] carrying a fixed diagnostic if absent.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => PanicError::raise(UNWRAP_ABSENT),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Calls `function` with a reference to the contained value, if any,
    /// and returns the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let present: Optional<i32> = Optional::of(5);
    /// let same = present.inspect(|n| seen.push(*n));
    /// assert_eq!(same, Optional::some(5));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `function`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => function(),
        }
    }

    /// Returns whichever of `self` and `other` is present when exactly one
    /// is, otherwise a typed `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let one: Optional<i32> = Optional::of(1);
    /// let two: Optional<i32> = Optional::of(2);
    /// let none: Optional<i32> = Optional::empty();
    ///
    /// assert_eq!(one.xor(none), Optional::some(1));
    /// assert_eq!(none.xor(two), Optional::some(2));
    /// assert_eq!(one.xor(two), Optional::empty());
    /// assert_eq!(none.xor(none), Optional::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Takes the value out, leaving `Absent` in its place.
    ///
    /// Returns the previous contents, present or absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let mut slot: Optional<i32> = Optional::of(2);
    /// assert_eq!(slot.take(), Optional::some(2));
    /// assert!(slot.is_absent());
    /// assert_eq!(slot.take(), Optional::empty());
    /// ```
    #[inline]
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    /// Takes the value out if it matches `predicate`.
    ///
    /// An absent slot returns `Absent` and `predicate` is not called. When
    /// the predicate rejects the value, the slot is left untouched and
    /// `Absent` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let mut slot: Optional<i32> = Optional::of(4);
    /// assert_eq!(slot.take_if(|n| *n > 10), Optional::empty());
    /// assert_eq!(slot, Optional::some(4));
    ///
    /// assert_eq!(slot.take_if(|n| n % 2 == 0), Optional::some(4));
    /// assert!(slot.is_absent());
    /// ```
    pub fn take_if<F>(&mut self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.is_present_and(predicate) {
            self.take()
        } else {
            Self::Absent
        }
    }

    /// Stores `value` in the slot and returns the previous contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let mut slot: Optional<&str> = Optional::empty();
    /// assert_eq!(slot.replace("first"), Optional::empty());
    /// assert_eq!(slot.replace("second"), Optional::some("first"));
    /// assert_eq!(slot, Optional::some("second"));
    /// ```
    #[inline]
    pub const fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Present(value))
    }

    // =========================================================================
    // Views and Conversions
    // =========================================================================

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Mutably borrows the contained value.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts into an [`Outcome`], mapping `Absent` to `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::{Optional, Outcome};
    ///
    /// let absent: Optional<i32> = Optional::empty();
    /// assert_eq!(absent.ok_or("missing"), Outcome::err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Ok(value),
            Self::Absent => Outcome::Err(error),
        }
    }

    /// Converts into an [`Outcome`], computing the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Ok(value),
            Self::Absent => Outcome::Err(function()),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the contained value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    ///
    /// let absent: Optional<String> = Optional::empty();
    /// assert_eq!(absent.unwrap_or_default(), String::new());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::of(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Encodes `Optional` the way serde encodes `Option`: `Absent` is `null`.
///
/// Formats such as JSON have a single `null`, so a present payload that is
/// itself empty (`Optional::<Option<U>>::some(None)`) also serializes as
/// `null` and deserializes back as `Absent`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
