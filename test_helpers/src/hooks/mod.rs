//! Helpers for observing the process-wide reporter in tests.
//!
//! The global hooks are process-wide state requiring serialized access across
//! all test files. [`capture`] acquires a global mutex, installs a log hook
//! that records every message and a terminate hook that panics with
//! [`Terminated`], and clears both hooks when the guard is dropped.
//!
//! The mutex is not re-entrant: do not call [`capture`] again while a guard is
//! alive on the same thread.
//!
//! # Examples
//!
//! ```
//! use hooked_outcome::Outcome;
//! use test_helpers::hooks;
//!
//! let capture = hooks::capture();
//! let value = Outcome::<u8, &str>::Err("Empty input").unwrap_or_log("parse", 0);
//! assert_eq!(value, 0);
//! assert_eq!(capture.messages(), vec![String::from("RECOVERABLE: parse: Empty input")]);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

use anyhow::{Result, anyhow};
use hooked_outcome::{clear_hooks, set_log_hook, set_terminate_hook};
use parking_lot::{Mutex, MutexGuard};

static HOOK_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Panic payload raised by the terminate hook that [`capture`] installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminated;

/// RAII guard that records global reports and clears the hooks on drop.
#[must_use = "dropping clears the global hooks and releases the hook lock"]
pub struct CaptureGuard {
    messages: Arc<Mutex<Vec<String>>>,
    terminations: Arc<AtomicUsize>,
    _lock: MutexGuard<'static, ()>,
}

impl CaptureGuard {
    /// Messages logged since the guard was created, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Removes and returns the messages logged so far.
    #[must_use]
    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }

    /// Number of times the terminate hook ran.
    #[must_use]
    pub fn terminations(&self) -> usize {
        self.terminations.load(Ordering::SeqCst)
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        clear_hooks();
    }
}

/// Installs capturing hooks on the process-wide reporter.
///
/// The global hook mutex is held for the lifetime of the returned guard, so no
/// other capture can replace the hooks concurrently.
pub fn capture() -> CaptureGuard {
    let lock = HOOK_MUTEX.lock();
    let messages = Arc::new(Mutex::new(Vec::new()));
    let terminations = Arc::new(AtomicUsize::new(0));

    let sink = Arc::clone(&messages);
    set_log_hook(move |message| sink.lock().push(message.to_owned()));

    let counter = Arc::clone(&terminations);
    set_terminate_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        panic::panic_any(Terminated);
    });

    CaptureGuard {
        messages,
        terminations,
        _lock: lock,
    }
}

/// Runs `run` and checks that it halted through the capturing terminate hook.
///
/// # Errors
///
/// Returns an error when `run` completes normally or panics with a payload
/// other than [`Terminated`].
///
/// # Examples
///
/// ```
/// use hooked_outcome::Outcome;
/// use test_helpers::hooks;
///
/// let capture = hooks::capture();
/// let outcome = Outcome::<u8, &str>::Err("boom");
/// hooks::expect_termination(|| outcome.unwrap("ctx")).expect("accessor should terminate");
/// assert_eq!(capture.terminations(), 1);
/// ```
pub fn expect_termination<R>(run: impl FnOnce() -> R) -> Result<()> {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(_) => Err(anyhow!("accessor returned without terminating")),
        Err(payload) if payload.is::<Terminated>() => Ok(()),
        Err(_) => Err(anyhow!("accessor panicked without reaching the terminate hook")),
    }
}
