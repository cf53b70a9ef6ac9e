//! A move-only success/failure container with pluggable failure reporting.
//!
//! [`Outcome`] holds either a success payload or an error payload and never
//! both. Transforms such as [`Outcome::map`] and [`Outcome::and_then`] are pure;
//! only the reporting accessors ([`Outcome::unwrap`], [`Outcome::expect`],
//! [`Outcome::unwrap_or_log`] and friends) talk to a [`Reporter`], which routes
//! formatted messages to a log hook and halts through a terminate hook.
//!
//! Hooks live in one process-wide registry shared by every `Outcome<T, E>`
//! instantiation. Callers that want isolated hooks build their own
//! [`Reporter`] and bind it with [`Outcome::report_to`].
//!
//! # Examples
//!
//! ```
//! use hooked_outcome::Outcome;
//!
//! fn divide(a: f64, b: f64) -> Outcome<f64, String> {
//!     if b == 0.0 {
//!         return Outcome::Err(String::from("Division by zero"));
//!     }
//!     Outcome::Ok(a / b)
//! }
//!
//! let halved = divide(10.0, 2.0).map(|v| v / 2.0);
//! assert_eq!(halved.unwrap_or(0.0), 2.5);
//! ```

mod convert;
mod describe;
mod outcome;
pub mod reporting;
mod status;

pub use convert::IntoOutcome;
pub use describe::{NULL_TEXT, NullableText, describe_error};
pub use outcome::Outcome;
pub use reporting::{
    LogHook, LogSink, Misuse, Report, Reporter, ReporterBuilder, Reporting, Severity,
    TerminateHook, clear_hooks, set_log_hook, set_terminate_hook,
};
pub use status::Status;
