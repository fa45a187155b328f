//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::container::Optional;
//! use optres::typeclass::Functor;
//!
//! let present: Optional<i32> = Optional::some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::some("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::empty();
//! assert_eq!(absent.fmap(|n| n.to_string()), Optional::empty());
//! ```

use super::higher::TypeConstructor;
use crate::container::{Optional, Outcome};

/// A type class for containers whose contents can be mapped.
///
/// `fmap` transforms the inner value while preserving the container's
/// shape: an absent `Optional` stays absent and a failed `Outcome` keeps
/// its error.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Outcome;
    /// use optres::typeclass::Functor;
    ///
    /// let success: Outcome<i32, String> = Outcome::ok(5);
    /// assert_eq!(success.fmap(|n| n * 2), Outcome::ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::container::Optional;
    /// use optres::typeclass::Functor;
    ///
    /// let name: Optional<String> = Optional::some("optres".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Optional::some(6));
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(function(value)),
            Outcome::Err(error) => Outcome::Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_fmap_present() {
        let present: Optional<i32> = Optional::some(3);
        assert_eq!(present.fmap(|n| n + 1), Optional::some(4));
    }

    #[rstest]
    fn optional_fmap_absent_does_not_call_function() {
        let absent: Optional<i32> = Optional::empty();
        let mapped: Optional<i32> = absent.fmap(|_| unreachable!());
        assert!(mapped.is_absent());
    }

    #[rstest]
    fn outcome_fmap_ref_clones_error() {
        let failure: Outcome<i32, String> = Outcome::err("bad".to_string());
        let mapped = failure.fmap_ref(|n| n + 1);
        assert_eq!(mapped, Outcome::err("bad".to_string()));
        assert_eq!(failure, Outcome::err("bad".to_string()));
    }

    #[rstest]
    fn functor_void_discards_value() {
        let present: Optional<i32> = Optional::some(3);
        assert_eq!(present.void(), Optional::some(()));
    }
}
