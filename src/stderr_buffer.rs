//! Diagnostics routed to stderr.
//!
//! While the dashboard owns the terminal, messages are held back and
//! flushed after it is restored. Verbose-only messages are dropped unless
//! `set_verbose(true)` was called at startup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Activate buffering. While active, `warn()` calls store messages
/// instead of printing to stderr.
pub fn activate() {
    if let Ok(mut guard) = BUFFER.lock() {
        *guard = Some(Vec::new());
    }
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .ok()
        .and_then(|mut guard| guard.take())
        .unwrap_or_default()
}

/// Write a message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    if let Ok(mut guard) = BUFFER.lock() {
        if let Some(buf) = guard.as_mut() {
            buf.push(msg);
            return;
        }
    }
    eprintln!("{}", msg);
}

/// Like `warn`, but only when verbose output is enabled.
pub fn info(msg: String) {
    if is_verbose() {
        warn(msg);
    }
}

/// Convenience macro that works like `eprintln!` but routes through the
/// stderr buffer when it is active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::warn(format!($($arg)*))
    };
}

/// `buffered_eprintln!` that only prints with `--verbose`.
#[macro_export]
macro_rules! verbose_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::info(format!($($arg)*))
    };
}
