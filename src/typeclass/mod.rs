//! Type class traits for the containers.
//!
//! This module lets [`Optional`](crate::container::Optional) and
//! [`Outcome`](crate::container::Outcome) be used through the usual
//! functional abstractions:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both the success and error side of `Outcome`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The
//! [`TypeConstructor`] trait uses Generic Associated Types to emulate them.
//!
//! # Examples
//!
//! ```rust
//! use optres::container::Outcome;
//! use optres::typeclass::{Applicative, Functor, Monad};
//!
//! let width: Outcome<u32, String> = Outcome::ok(3);
//! let height: Outcome<u32, String> = Outcome::ok(4);
//!
//! let area = width
//!     .map2(height, |w, h| w * h)
//!     .fmap(|a| a + 1)
//!     .flat_map(|a| if a > 10 { Outcome::ok(a) } else { Outcome::err("too small".to_string()) });
//! assert_eq!(area, Outcome::ok(13));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
