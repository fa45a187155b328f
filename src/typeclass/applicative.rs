//! Applicative type class - lifting values and combining independent containers.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::container::Optional;
//! use optres::typeclass::Applicative;
//!
//! let width: Optional<u32> = Optional::some(3);
//! let height: Optional<u32> = Optional::some(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Optional::some(12));
//! ```

use super::functor::Functor;
use crate::container::{Optional, Outcome};

/// A functor that can lift plain values and combine two containers.
pub trait Applicative: Functor {
    /// Lifts a value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::{Optional, Outcome};
    /// use optres::typeclass::Applicative;
    ///
    /// let present: Optional<i32> = <Optional<()>>::pure(42);
    /// assert_eq!(present, Optional::some(42));
    ///
    /// let success: Outcome<&str, String> = <Outcome<(), String>>::pure("hi");
    /// assert_eq!(success, Outcome::ok("hi"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// The result is empty or failed if either input is. For [`Outcome`] the
    /// first error wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(function(a, b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }
}
