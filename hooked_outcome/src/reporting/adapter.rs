//! Reporting accessors bound to an explicit [`Reporter`].

use std::fmt;

use super::report::Report;
use super::reporter::Reporter;
use crate::describe::describe_error;
use crate::outcome::Outcome;

/// An [`Outcome`] paired with the [`Reporter`] its accessors report to.
///
/// Built by [`Outcome::report_to`]. The accessors mirror the ones on
/// `Outcome`, which use [`Reporter::global`].
#[must_use = "a `Reporting` does nothing until one of its accessors consumes it"]
pub struct Reporting<'r, T, E> {
    outcome: Outcome<T, E>,
    reporter: &'r Reporter,
}

impl<'r, T, E> Reporting<'r, T, E> {
    pub(crate) const fn new(outcome: Outcome<T, E>, reporter: &'r Reporter) -> Self {
        Self { outcome, reporter }
    }

    /// Returns the bound reporter.
    #[must_use]
    pub const fn reporter(&self) -> &'r Reporter {
        self.reporter
    }

    /// Releases the outcome without reporting anything.
    pub fn into_inner(self) -> Outcome<T, E> {
        self.outcome
    }

    /// Returns the success payload, or logs a fatal report and terminates.
    ///
    /// An empty `context` is left out of the message.
    ///
    /// # Panics
    ///
    /// Panics only when the installed terminate hook panics.
    #[must_use]
    pub fn unwrap(self, context: &str) -> T
    where
        E: fmt::Display,
    {
        match self.outcome {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => self
                .reporter
                .fail(&Report::unwrap_on_err(context, &describe_error(&error))),
        }
    }

    /// Returns the error payload, or logs a fatal report and terminates.
    ///
    /// # Panics
    ///
    /// Panics only when the installed terminate hook panics.
    #[must_use]
    pub fn unwrap_err(self, context: &str) -> E {
        match self.outcome {
            Outcome::Err(error) => error,
            Outcome::Ok(_) => self.reporter.fail(&Report::unwrap_err_on_ok(context)),
        }
    }

    /// Returns the success payload, or logs the failed expectation and
    /// terminates.
    ///
    /// # Panics
    ///
    /// Panics only when the installed terminate hook panics.
    #[must_use]
    pub fn expect(self, expectation: &str) -> T
    where
        E: fmt::Display,
    {
        match self.outcome {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => self.reporter.fail(&Report::expectation_failed(
                expectation,
                &describe_error(&error),
            )),
        }
    }

    /// Returns the success payload, or logs a recoverable report and returns
    /// `default`.
    #[must_use]
    pub fn unwrap_or_log(self, context: &str, default: T) -> T
    where
        E: fmt::Display,
    {
        match self.outcome {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                self.reporter
                    .log(&Report::recovered(context, &describe_error(&error)));
                default
            }
        }
    }

    /// Returns the success payload, or logs a warning and returns
    /// `T::default()`.
    #[must_use]
    pub fn unwrap_checked(self) -> T
    where
        T: Default,
    {
        match self.outcome {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => {
                self.reporter.log(&Report::checked_on_err());
                T::default()
            }
        }
    }
}

impl<T, E> fmt::Debug for Reporting<'_, T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporting")
            .field("outcome", &self.outcome)
            .field("reporter", self.reporter)
            .finish()
    }
}
