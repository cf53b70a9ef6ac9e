//! Failure reporting for the unwrap family of accessors.
//!
//! A [`Report`] is built whenever a reporting accessor meets the wrong
//! variant. The [`Reporter`] hands its text to the installed log hook (or the
//! configured [`LogSink`]) and, for fatal reports, halts through the terminate
//! hook. Termination never returns: a terminate hook that comes back is
//! followed by a process abort.
//!
//! Transforms on [`crate::Outcome`] never reach this module.

mod adapter;
mod report;
mod reporter;

pub use adapter::Reporting;
pub use report::{Misuse, Report, Severity};
pub use reporter::{
    LogHook, LogSink, Reporter, ReporterBuilder, TerminateHook, clear_hooks, set_log_hook,
    set_terminate_hook,
};
