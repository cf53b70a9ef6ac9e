//! Hook registry that turns reports into log output and termination.

use std::fmt;
use std::io::{self, Write};
use std::process;
use std::sync::Arc;

use parking_lot::Mutex;

use super::report::{Report, Severity};

/// Callback receiving the formatted text of every report.
pub type LogHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback invoked to halt after a fatal report.
///
/// The hook is expected never to return. If it does, the reporter aborts the
/// process.
pub type TerminateHook = Arc<dyn Fn() + Send + Sync>;

static GLOBAL: Reporter = Reporter::new();

/// Destination for reports when no log hook is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSink {
    /// Write each report as one line on standard error.
    #[default]
    Stderr,
    /// Emit each report as a `tracing` event; fatal reports use `ERROR`,
    /// everything else `WARN`.
    Tracing,
    /// Drop reports silently.
    Discard,
}

impl LogSink {
    fn write(self, report: &Report, message: &str) {
        match self {
            Self::Stderr => {
                let mut stderr = io::stderr().lock();
                if let Err(err) = writeln!(stderr, "{message}") {
                    tracing::warn!(error = %err, "failed to write report to stderr");
                }
            }
            Self::Tracing => match report.severity() {
                Severity::Fatal => {
                    tracing::error!(severity = %report.severity(), "{message}");
                }
                Severity::Recoverable | Severity::Warning => {
                    tracing::warn!(severity = %report.severity(), "{message}");
                }
            },
            Self::Discard => {}
        }
    }
}

#[derive(Default)]
struct Hooks {
    log: Option<LogHook>,
    terminate: Option<TerminateHook>,
}

/// Routes reports to a log hook and halts through a terminate hook.
///
/// Every read-and-invoke of a hook and every hook replacement is serialised by
/// one lock, so a hook is never swapped out while it runs. Hooks therefore
/// must not call back into the reporter that invoked them.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use hooked_outcome::{Outcome, Reporter};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&lines);
/// let reporter = Reporter::builder()
///     .with_log_hook(move |message| sink.lock().expect("sink lock").push(message.to_owned()))
///     .build();
///
/// let value = Outcome::<f64, &str>::Err("Division by zero")
///     .report_to(&reporter)
///     .unwrap_or_log("divide", 0.0);
///
/// assert_eq!(value, 0.0);
/// assert_eq!(
///     *lines.lock().expect("sink lock"),
///     vec![String::from("RECOVERABLE: divide: Division by zero")]
/// );
/// ```
pub struct Reporter {
    hooks: Mutex<Hooks>,
    sink: LogSink,
}

impl Reporter {
    /// Creates a reporter with no hooks that writes to standard error and
    /// aborts on fatal reports.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_sink(LogSink::Stderr)
    }

    const fn with_sink(sink: LogSink) -> Self {
        Self {
            hooks: Mutex::new(Hooks {
                log: None,
                terminate: None,
            }),
            sink,
        }
    }

    /// Starts configuring a reporter.
    #[must_use]
    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::default()
    }

    /// The process-wide reporter used by [`crate::Outcome::unwrap`] and the
    /// other reporting accessors.
    ///
    /// One reporter serves every `Outcome<T, E>` instantiation.
    #[must_use]
    pub const fn global() -> &'static Self {
        &GLOBAL
    }

    /// Replaces the log hook.
    pub fn set_log_hook(&self, hook: impl Fn(&str) + Send + Sync + 'static) {
        self.hooks.lock().log = Some(Arc::new(hook));
        tracing::debug!("installed log hook");
    }

    /// Replaces the terminate hook.
    pub fn set_terminate_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.hooks.lock().terminate = Some(Arc::new(hook));
        tracing::debug!("installed terminate hook");
    }

    /// Removes both hooks, restoring the default sink and process abort.
    pub fn clear_hooks(&self) {
        *self.hooks.lock() = Hooks::default();
        tracing::debug!("cleared reporting hooks");
    }

    /// Returns `true` when a log hook is installed.
    #[must_use]
    pub fn has_log_hook(&self) -> bool {
        self.hooks.lock().log.is_some()
    }

    /// Returns `true` when a terminate hook is installed.
    #[must_use]
    pub fn has_terminate_hook(&self) -> bool {
        self.hooks.lock().terminate.is_some()
    }

    /// Sink used when no log hook is installed.
    #[must_use]
    pub const fn sink(&self) -> LogSink {
        self.sink
    }

    /// Delivers a report to the log hook, or to the sink when none is set.
    pub fn log(&self, report: &Report) {
        let message = report.to_string();
        let hooks = self.hooks.lock();
        hooks.log.as_ref().map_or_else(
            || self.sink.write(report, &message),
            |hook| hook(&message),
        );
    }

    /// Halts through the terminate hook, aborting the process if the hook is
    /// missing or returns.
    pub fn terminate(&self) -> ! {
        {
            let hooks = self.hooks.lock();
            if let Some(hook) = hooks.terminate.as_ref() {
                hook();
                tracing::error!("terminate hook returned; aborting");
            }
        }
        process::abort()
    }

    /// Logs a fatal report, then terminates.
    pub fn fail(&self, report: &Report) -> ! {
        self.log(report);
        self.terminate()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks = self.hooks.lock();
        f.debug_struct("Reporter")
            .field("log", &hooks.log.as_ref().map(|_| "<hook>"))
            .field("terminate", &hooks.terminate.as_ref().map(|_| "<hook>"))
            .field("sink", &self.sink)
            .finish()
    }
}

/// Builds a [`Reporter`].
#[derive(Default)]
pub struct ReporterBuilder {
    sink: LogSink,
    log: Option<LogHook>,
    terminate: Option<TerminateHook>,
}

impl ReporterBuilder {
    /// Chooses where reports go while no log hook is installed.
    #[must_use]
    pub const fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Installs an initial log hook.
    #[must_use]
    pub fn with_log_hook(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log = Some(Arc::new(hook));
        self
    }

    /// Installs an initial terminate hook.
    #[must_use]
    pub fn with_terminate_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.terminate = Some(Arc::new(hook));
        self
    }

    /// Finishes configuration.
    #[must_use]
    pub fn build(self) -> Reporter {
        Reporter {
            hooks: Mutex::new(Hooks {
                log: self.log,
                terminate: self.terminate,
            }),
            sink: self.sink,
        }
    }
}

impl fmt::Debug for ReporterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterBuilder")
            .field("sink", &self.sink)
            .field("log", &self.log.as_ref().map(|_| "<hook>"))
            .field("terminate", &self.terminate.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

/// Replaces the log hook of the process-wide reporter.
///
/// # Examples
///
/// ```
/// use hooked_outcome::{clear_hooks, set_log_hook};
///
/// set_log_hook(|message| assert!(message.starts_with("RECOVERABLE")));
/// clear_hooks();
/// ```
pub fn set_log_hook(hook: impl Fn(&str) + Send + Sync + 'static) {
    Reporter::global().set_log_hook(hook);
}

/// Replaces the terminate hook of the process-wide reporter.
pub fn set_terminate_hook(hook: impl Fn() + Send + Sync + 'static) {
    Reporter::global().set_terminate_hook(hook);
}

/// Clears both hooks of the process-wide reporter.
pub fn clear_hooks() {
    Reporter::global().clear_hooks();
}
