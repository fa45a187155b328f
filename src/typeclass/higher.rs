//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. `TypeConstructor` works around this with a GAT, which lets
//! [`Functor`](super::Functor) and friends talk about "the same container,
//! holding a different type".
//!
//! # Example
//!
//! ```rust
//! use optres::container::Optional;
//! use optres::typeclass::TypeConstructor;
//!
//! fn reset<C: TypeConstructor>(_container: C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::some(42);
//! assert!(reset(present).is_absent());
//! ```

use crate::container::{Optional, Outcome};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
