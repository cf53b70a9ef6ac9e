//! Structured failure reports and their textual form.

use std::fmt;

use thiserror::Error;

/// How a report affects control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The accessor halts through the terminate hook after logging.
    Fatal,
    /// The accessor substitutes a caller-supplied value after logging.
    Recoverable,
    /// The accessor substitutes a default value after logging.
    Warning,
}

impl Severity {
    /// Label written in front of every message with this severity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Recoverable => "RECOVERABLE",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accessor misuse that triggered a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Misuse {
    /// A success-only accessor met an `Err`.
    #[error("Attempted to unwrap an Err value")]
    UnwrapOnErr,

    /// An error-only accessor met an `Ok`.
    #[error("Attempted to unwrapErr an Ok value")]
    UnwrapErrOnOk,

    /// `expect` met an `Err`.
    #[error("Expectation failed: {expectation}")]
    ExpectationFailed {
        /// Caller-supplied description of what should have held.
        expectation: String,
    },

    /// `unwrap_checked` met an `Err` and fell back to a default value.
    #[error("Attempted to unwrapChecked an Err value")]
    CheckedOnErr,
}

/// A formatted message handed to the log hook.
///
/// The `Display` form is the exact text the hook receives.
///
/// # Examples
///
/// ```
/// use hooked_outcome::{Report, Severity};
///
/// let report = Report::recovered("parse config", "Empty input");
/// assert_eq!(report.severity(), Severity::Recoverable);
/// assert_eq!(report.to_string(), "RECOVERABLE: parse config: Empty input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    severity: Severity,
    misuse: Option<Misuse>,
    detail: Option<String>,
}

impl Report {
    /// Report for `unwrap` on an `Err`.
    #[must_use]
    pub fn unwrap_on_err(context: &str, error: &str) -> Self {
        Self {
            severity: Severity::Fatal,
            misuse: Some(Misuse::UnwrapOnErr),
            detail: Some(with_context(context, error)),
        }
    }

    /// Report for `unwrap_err` on an `Ok`.
    ///
    /// The headline is repeated after the context, since there is no error
    /// payload to describe.
    #[must_use]
    pub fn unwrap_err_on_ok(context: &str) -> Self {
        let misuse = Misuse::UnwrapErrOnOk;
        let detail = with_context(context, &misuse.to_string());
        Self {
            severity: Severity::Fatal,
            misuse: Some(misuse),
            detail: Some(detail),
        }
    }

    /// Report for `expect` on an `Err`.
    #[must_use]
    pub fn expectation_failed(expectation: &str, error: &str) -> Self {
        Self {
            severity: Severity::Fatal,
            misuse: Some(Misuse::ExpectationFailed {
                expectation: expectation.to_owned(),
            }),
            detail: Some(error.to_owned()),
        }
    }

    /// Report for `unwrap_or_log` on an `Err`.
    #[must_use]
    pub fn recovered(context: &str, error: &str) -> Self {
        Self {
            severity: Severity::Recoverable,
            misuse: None,
            detail: Some(with_context(context, error)),
        }
    }

    /// Report for `unwrap_checked` on an `Err`.
    #[must_use]
    pub const fn checked_on_err() -> Self {
        Self {
            severity: Severity::Warning,
            misuse: Some(Misuse::CheckedOnErr),
            detail: None,
        }
    }

    /// Severity of the report.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Misuse that triggered the report, absent for recoverable reports.
    #[must_use]
    pub const fn misuse(&self) -> Option<&Misuse> {
        self.misuse.as_ref()
    }

    /// Context and error text carried after the headline.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.severity)?;
        match (&self.misuse, &self.detail) {
            (Some(misuse @ Misuse::ExpectationFailed { .. }), Some(detail)) => {
                write!(f, "{misuse}. {detail}")
            }
            (Some(misuse), Some(detail)) => write!(f, "{misuse} - {detail}"),
            (Some(misuse), None) => write!(f, "{misuse}"),
            (None, Some(detail)) => f.write_str(detail),
            (None, None) => Ok(()),
        }
    }
}

fn with_context(context: &str, error: &str) -> String {
    if context.is_empty() {
        error.to_owned()
    } else {
        format!("{context}: {error}")
    }
}
