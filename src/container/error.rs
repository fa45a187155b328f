//! The opaque error carried by default in [`Outcome`](super::Outcome).

use std::fmt;
use std::sync::Arc;

/// An opaque, cloneable error value.
///
/// `Error` is the default error type of [`Outcome`](super::Outcome). The
/// containers never inspect it; it is threaded through transformations
/// untouched. Any `std::error::Error + Send + Sync + 'static` converts into
/// it, so `?`-style conversions work at the call site.
///
/// `Error` deliberately does not implement `std::error::Error` itself, since
/// that would overlap with the blanket `From` conversion. Use
/// [`Error::as_dyn_error`] to reach the underlying error.
///
/// # Examples
///
/// ```rust
/// use optres::container::Error;
///
/// let error = Error::msg("disk full");
/// assert_eq!(error.to_string(), "disk full");
///
/// let parsed: Error = "x".parse::<i32>().unwrap_err().into();
/// assert!(parsed.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Clone)]
pub struct Error {
    inner: Arc<dyn std::error::Error + Send + Sync + 'static>,
}

impl Error {
    /// Wraps an existing error.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an error from a printable message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(MessageError(message))
    }

    /// Returns the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns the wrapped error as a trait object.
    pub fn as_dyn_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Error").field(&self.inner).finish()
    }
}

struct MessageError<M>(M);

impl<M: fmt::Display> fmt::Display for MessageError<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl<M: fmt::Debug> fmt::Debug for MessageError<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl<M: fmt::Display + fmt::Debug> std::error::Error for MessageError<M> {}
