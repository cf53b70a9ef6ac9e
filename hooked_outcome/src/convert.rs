//! Interop between [`Outcome`] and `std::result::Result`.
//!
//! Fallible std APIs return `Result`; [`IntoOutcome::into_outcome`] lifts them
//! into an `Outcome` so the reporting accessors are available. Going the other
//! way, [`Outcome::into_result`] hands a value back to code that wants `?`.
//!
//! # Examples
//!
//! ```
//! use hooked_outcome::{IntoOutcome, Outcome};
//!
//! let port = "8080".parse::<u16>().into_outcome().unwrap_or_log("port", 80);
//! assert_eq!(port, 8080);
//!
//! fn doubled(raw: &str) -> Result<u32, String> {
//!     let value = Outcome::<u32, String>::Ok(raw.len() as u32).into_result()?;
//!     Ok(value * 2)
//! }
//! assert_eq!(doubled("abc"), Ok(6));
//! ```

use crate::outcome::Outcome;

/// Extension lifting `Result<T, E>` into `Outcome<T, E>`.
pub trait IntoOutcome<T, E> {
    /// Convert `Result<T, E>` into `Outcome<T, E>`, keeping the variant.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into `Result<T, E>`.
    ///
    /// # Errors
    ///
    /// Returns the error payload when the outcome is `Err`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Keeps the success payload, dropping any error.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Keeps the error payload, dropping any success.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }
}
