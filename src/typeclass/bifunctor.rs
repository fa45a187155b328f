//! Bifunctor type class - mapping over both sides of a two-parameter type.
//!
//! [`Outcome<T, E>`](crate::container::Outcome) implements `Bifunctor<E, T>`:
//! the error is the first parameter and the success value the second, so
//! that `second` coincides with [`Functor::fmap`](super::Functor::fmap).
//!
//! # Laws
//!
//! ```text
//! x.bimap(|a| a, |b| b) == x
//! x.bimap(|a| f2(f1(a)), |b| g2(g1(b))) == x.bimap(f1, g1).bimap(f2, g2)
//! x.bimap(f, g) == x.first(f).second(g)
//! ```

use crate::container::Outcome;

/// A type class for types with two mappable parameters.
///
/// # Examples
///
/// ```rust
/// use optres::container::Outcome;
/// use optres::typeclass::Bifunctor;
///
/// let failure: Outcome<i32, String> = Outcome::err("bad".to_string());
/// let mapped = failure.bimap(|e| e.len(), |n| n * 2);
/// assert_eq!(mapped, Outcome::err(3));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type after applying the transformation.
    ///
    /// For `Outcome<T, E>`, `Target<C, D> = Outcome<D, C>`.
    type Target<C, D>;

    /// Applies one function to each side.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C;

    /// Maps the second parameter only.
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D;
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(second_function(value)),
            Self::Err(error) => Outcome::Err(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bimap_on_ok_maps_value() {
        let success: Outcome<i32, String> = Outcome::ok(21);
        assert_eq!(success.bimap(|e: String| e.len(), |n| n * 2), Outcome::ok(42));
    }

    #[rstest]
    fn first_maps_error_only() {
        let failure: Outcome<i32, &str> = Outcome::err("bad");
        assert_eq!(failure.first(str::len), Outcome::err(3));

        let success: Outcome<i32, &str> = Outcome::ok(1);
        assert_eq!(success.first(str::len), Outcome::ok(1));
    }

    #[rstest]
    fn second_matches_map() {
        let success: Outcome<i32, &str> = Outcome::ok(1);
        assert_eq!(success.second(|n| n + 1), success.map(|n| n + 1));
    }
}
