//! Error types for the logger system

use super::log_level::LogLevel;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Color theme name not present in the theme registry
    #[error("Unknown color theme: '{0}'")]
    UnknownColorTheme(String),

    /// Level has no entry in the routing table
    #[error("Log level {0} is not defined in the routing table")]
    UndefinedLevel(LogLevel),

    /// Logger already closed, no new messages are accepted
    #[error("Logger already stopped")]
    LoggerStopped,

    /// Queue was not drained before the close deadline
    #[error("Logger shutdown timed out after {timeout:?}: {remaining} messages not written")]
    ShutdownTimeout { remaining: usize, timeout: Duration },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Channel send error
    #[error("Failed to send log message to async worker")]
    ChannelSendError,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn unknown_theme(name: impl Into<String>) -> Self {
        LoggerError::UnknownColorTheme(name.into())
    }

    pub fn shutdown_timeout(remaining: usize, timeout: Duration) -> Self {
        LoggerError::ShutdownTimeout { remaining, timeout }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// True for errors caused by caller-supplied configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::UnknownColorTheme(_)
                | LoggerError::UndefinedLevel(_)
                | LoggerError::InvalidConfiguration { .. }
                | LoggerError::JsonError(_)
        )
    }
}
