//! Value containers and their combinators.
//!
//! This module provides the two containers at the heart of the crate:
//!
//! - [`Optional`]: zero or one value, with in-place `take`/`replace`
//! - [`Outcome`]: a success value or a carried error
//!
//! Misusing an unwrap-family accessor (for example calling
//! [`Optional::unwrap`] on an absent container) is a contract violation and
//! panics with the message of a [`PanicError`], which
//! [`PanicError::capture`] turns back into a value. The recoverable error
//! channel is the error branch of [`Outcome`], whose default payload is the opaque [`Error`].
//!
//! # Examples
//!
//! ```rust
//! use optres::container::{Optional, Outcome};
//!
//! let present: Optional<i32> = Optional::of(12345);
//! assert_eq!(present.unwrap_or(123), 12345);
//!
//! let absent: Optional<i32> = Optional::none();
//! assert_eq!(absent.unwrap_or(123), 123);
//!
//! let success: Outcome<i32> = Outcome::ok(12345);
//! assert!(success.is_ok());
//! assert_eq!(success.unwrap(), 12345);
//! ```

mod error;
mod optional;
mod outcome;
mod panic;

pub use error::Error;
pub use optional::Optional;
pub use outcome::Outcome;
pub use panic::PanicError;

static_assertions::assert_impl_all!(Error: Send, Sync, Clone);
static_assertions::assert_impl_all!(PanicError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Default);
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
