//! Outcomes whose success carries no payload.

use crate::outcome::Outcome;

/// An outcome that either succeeded with nothing to hand back or failed with
/// `E`.
///
/// # Examples
///
/// ```
/// use hooked_outcome::Status;
///
/// fn flush(dirty: bool) -> Status<&'static str> {
///     if dirty {
///         return Status::Err("write failed");
///     }
///     Status::success()
/// }
///
/// assert_eq!(flush(false).map_unit(|| "flushed"), hooked_outcome::Outcome::Ok("flushed"));
/// assert!(flush(true).is_err());
/// ```
pub type Status<E> = Outcome<(), E>;

impl<E> Outcome<(), E> {
    /// The successful status.
    pub const fn success() -> Self {
        Self::Ok(())
    }

    /// Produces a payload after a success; an error passes through untouched.
    pub fn map_unit<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> U,
    {
        self.map(|()| f())
    }

    /// Runs a fallible step after a success; an error short-circuits without
    /// calling `f`.
    pub fn and_then_unit<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        self.and_then(|()| f())
    }
}

impl<E> From<Option<E>> for Outcome<(), E> {
    /// `None` means nothing went wrong.
    fn from(failure: Option<E>) -> Self {
        failure.map_or(Self::Ok(()), Self::Err)
    }
}
