//! Formatted log message

use super::color_mode::ColorMode;
use super::log_level::LogLevel;

/// A fully formatted line on its way to a destination.
///
/// Built once by the producer; the consumer only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: LogLevel,
    pub mode: ColorMode,
    /// Header, body and trailing newline
    pub text: String,
}

impl Message {
    pub fn new(level: LogLevel, mode: ColorMode, text: impl Into<String>) -> Self {
        Self {
            level,
            mode,
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}
