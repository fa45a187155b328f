//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::container::{Optional, Outcome};

/// An applicative whose next step may depend on the previous value.
///
/// `flat_map` is the trait-level name for the `and_then` combinator both
/// containers provide as inherent methods.
///
/// # Examples
///
/// ```rust
/// use optres::container::Optional;
/// use optres::typeclass::Monad;
///
/// let present: Optional<i32> = Optional::some(10);
/// let halved = present.flat_map(|n| if n > 0 { Optional::some(n / 2) } else { Optional::empty() });
/// assert_eq!(halved, Optional::some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a container and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first value.
    ///
    /// If `self` is empty or failed, that state propagates and `next` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    /// use optres::typeclass::Monad;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::err("stop");
    /// assert_eq!(failure.then(Outcome::ok("next")), Outcome::err("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}
