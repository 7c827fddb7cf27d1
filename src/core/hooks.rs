//! Error reporting hook
//!
//! Failures that happen away from the caller (a sink rejecting a write on
//! the consumer thread, a convenience call on a stopped logger) are handed
//! to this hook. Without a hook they are printed to stderr.

use super::error::LoggerError;
use super::log_level::LogLevel;
use std::fmt;
use std::sync::Arc;

/// Where a reported failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSite {
    /// The consumer failed to write a message of this level
    Write(LogLevel),
    /// The appender panicked while writing a message of this level
    Panic(LogLevel),
    /// A flush during close failed
    Flush,
    /// A fire-and-forget log call was refused
    LogCall(LogLevel),
}

impl fmt::Display for FailureSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureSite::Write(level) => write!(f, "write of {} message", level),
            FailureSite::Panic(level) => write!(f, "appender panic on {} message", level),
            FailureSite::Flush => write!(f, "flush"),
            FailureSite::LogCall(level) => write!(f, "{} log call", level),
        }
    }
}

/// Callback type for failure notifications
pub type ErrorCallback = Arc<dyn Fn(FailureSite, &LoggerError) + Send + Sync>;

/// Send a failure to the hook, or stderr when none is installed
pub(crate) fn report(hook: Option<&ErrorCallback>, site: FailureSite, error: &LoggerError) {
    match hook {
        Some(callback) => callback(site, error),
        None => eprintln!("[LOGGER ERROR] {} failed: {}", site, error),
    }
}
