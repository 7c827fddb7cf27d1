//! Console appender implementation

use crate::core::{Appender, Message, Result};
use std::io::Write;

pub struct ConsoleAppender {
    split_failures: bool,
}

impl ConsoleAppender {
    /// Everything goes to stdout
    pub fn new() -> Self {
        Self {
            split_failures: false,
        }
    }

    /// Failure levels (Error, Fatal, *_FAIL) go to stderr, the rest to stdout
    pub fn with_stderr_for_failures() -> Self {
        Self {
            split_failures: true,
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, message: &Message) -> Result<()> {
        if self.split_failures && message.level.is_failure() {
            std::io::stderr().lock().write_all(message.as_bytes())?;
        } else {
            std::io::stdout().lock().write_all(message.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorMode, LogLevel};

    #[test]
    fn test_console_append() {
        let mut appender = ConsoleAppender::with_stderr_for_failures();
        appender
            .append(&Message::new(LogLevel::DbFail, ColorMode::Plain, "console test\n"))
            .unwrap();
        appender.flush().unwrap();
        assert_eq!(appender.name(), "console");
    }
}
