//! The [`Outcome`] container and its transforms.

use std::fmt;

use crate::reporting::{Reporter, Reporting};

/// Either a success payload (`Ok`) or an error payload (`Err`).
///
/// Exactly one payload is alive at a time. `Outcome` is move-only: it does not
/// implement `Clone`, and every accessor that extracts a payload consumes the
/// container, so a payload is never duplicated and a failure is reported at
/// most once.
///
/// The variants are the two factories:
///
/// ```
/// use hooked_outcome::Outcome;
///
/// let parsed: Outcome<u16, String> = Outcome::Ok(8080);
/// let failed: Outcome<u16, String> = Outcome::Err(String::from("Empty input"));
///
/// assert!(parsed.is_ok());
/// assert!(failed.is_err());
/// ```
#[must_use = "this `Outcome` may hold an error, which should be handled"]
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Success payload.
    Ok(T),
    /// Error payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for `Ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for `Err`.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Binds the outcome to `reporter` instead of the process-wide one.
    ///
    /// # Examples
    ///
    /// ```
    /// use hooked_outcome::{LogSink, Outcome, Reporter};
    ///
    /// let quiet = Reporter::builder().with_sink(LogSink::Discard).build();
    /// let value = Outcome::<i32, &str>::Err("boom")
    ///     .report_to(&quiet)
    ///     .unwrap_checked();
    /// assert_eq!(value, 0);
    /// ```
    pub const fn report_to(self, reporter: &Reporter) -> Reporting<'_, T, E> {
        Reporting::new(self, reporter)
    }

    /// Returns the success payload, or logs a fatal report through the
    /// process-wide reporter and terminates.
    ///
    /// The message reads `FATAL: Attempted to unwrap an Err value - {context}:
    /// {error}`; an empty `context` is left out.
    ///
    /// # Panics
    ///
    /// Panics only when the installed terminate hook panics.
    #[must_use]
    pub fn unwrap(self, context: &str) -> T
    where
        E: fmt::Display,
    {
        self.report_to(Reporter::global()).unwrap(context)
    }

    /// Returns the error payload, or logs a fatal report through the
    /// process-wide reporter and terminates.
    ///
    /// # Panics
    ///
    /// Panics only when the installed terminate hook panics.
    #[must_use]
    pub fn unwrap_err(self, context: &str) -> E {
        self.report_to(Reporter::global()).unwrap_err(context)
    }

    /// Returns the success payload, or logs `FATAL: Expectation failed:
    /// {expectation}. {error}` and terminates.
    ///
    /// # Panics
    ///
    /// Panics only when the installed terminate hook panics.
    #[must_use]
    pub fn expect(self, expectation: &str) -> T
    where
        E: fmt::Display,
    {
        self.report_to(Reporter::global()).expect(expectation)
    }

    /// Returns the success payload, or logs `RECOVERABLE: {context}: {error}`
    /// and returns `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hooked_outcome::Outcome;
    ///
    /// let ratio = Outcome::<f64, &str>::Err("Division by zero").unwrap_or_log("ratio", 0.0);
    /// assert_eq!(ratio, 0.0);
    /// ```
    #[must_use]
    pub fn unwrap_or_log(self, context: &str, default: T) -> T
    where
        E: fmt::Display,
    {
        self.report_to(Reporter::global())
            .unwrap_or_log(context, default)
    }

    /// Returns the success payload, or logs a warning and returns
    /// `T::default()`.
    #[must_use]
    pub fn unwrap_checked(self) -> T
    where
        T: Default,
    {
        self.report_to(Reporter::global()).unwrap_checked()
    }

    /// Returns the success payload or `default`, without reporting.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success payload, or the result of `fallback`.
    ///
    /// `fallback` only runs for `Err`.
    #[must_use]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback(),
        }
    }

    /// Returns the success payload or `T::default()`, without reporting.
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Transforms the success payload; an error passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error payload; a success passes through untouched.
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a fallible step onto a success; an error short-circuits without
    /// calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hooked_outcome::Outcome;
    ///
    /// fn non_empty(input: String) -> Outcome<String, String> {
    ///     if input.is_empty() {
    ///         return Outcome::Err(String::from("Empty input"));
    ///     }
    ///     Outcome::Ok(format!("Processed: {input}"))
    /// }
    ///
    /// let processed = Outcome::<String, String>::Ok(String::from("data")).and_then(non_empty);
    /// assert_eq!(processed, Outcome::Ok(String::from("Processed: data")));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from an error with a fallible step; a success passes through
    /// without calling `f`.
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Observes the active payload by reference. Exactly one branch runs and
    /// the outcome is left intact.
    pub fn match_ref<OnOk, OnErr>(&self, on_ok: OnOk, on_err: OnErr)
    where
        OnOk: FnOnce(&T),
        OnErr: FnOnce(&E),
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Moves the active payload into whichever branch runs and returns that
    /// branch's result.
    ///
    /// # Examples
    ///
    /// ```
    /// use hooked_outcome::Outcome;
    ///
    /// let line = Outcome::<u8, String>::Err(String::from("File not found"))
    ///     .match_consume(|v| format!("read {v} bytes"), |e| format!("error: {e}"));
    /// assert_eq!(line, "error: File not found");
    /// ```
    #[must_use]
    pub fn match_consume<R, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Calls `f` with the success payload, then hands the outcome back.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the error payload, then hands the outcome back.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }
}

#[cfg(test)]
mod tests;
