//! # optres
//!
//! Optional and outcome containers with a full set of functional
//! combinators.
//!
//! ## Overview
//!
//! - **[`Optional<T>`](container::Optional)**: zero or one value, with
//!   presence tests, mapping, fallback and in-place `take`/`replace`
//! - **[`Outcome<T, E>`](container::Outcome)**: a success value or a carried
//!   error, with mapping of either branch, chaining and fallback
//! - **Type Classes**: Functor, Applicative, Monad and Bifunctor instances
//!   for both containers
//!
//! Calling an unwrap-family accessor on the wrong state is a contract
//! violation and panics with the message of a
//! [`PanicError`](container::PanicError). The recoverable error channel is the `Err` branch of `Outcome`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let success: Outcome<i32> = Outcome::ok(12345);
//! assert_eq!(success.unwrap_or(123), 12345);
//!
//! let absent: Optional<i32> = Optional::none();
//! assert_eq!(absent.unwrap_or(123), 123);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their error types and, when enabled, the
/// type class traits.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod container;

#[cfg(feature = "typeclass")]
pub mod typeclass;
