//! # Rust Leveled Logger
//!
//! An embeddable, asynchronous, leveled and colorized logger.
//!
//! ## Features
//!
//! - **Routing**: every (level, color mode) pair has its own destination
//!   and can be enabled, disabled or re-pointed at runtime
//! - **Asynchronous**: producers enqueue formatted lines on a bounded queue,
//!   one consumer thread performs all writes in FIFO order
//! - **Colored output**: per-level ANSI prefixes from swappable color schemes
//! - **Graceful shutdown**: `close()` drains the queue within a bounded wait
//!
//! ## Example
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .default_destination(Destination::new(memory.clone()))
//!     .destination_flag(DestinationFlag::PlainOnly)
//!     .flags(FormatFlags::NONE)
//!     .build()?;
//!
//! logger.info(&[&"user", &42, &"logged in"]);
//! logger.disable_level(LogLevel::Debug)?;
//! logger.debug(&[&"not written"]);
//! logger.close()?;
//!
//! assert_eq!(memory.lines(), vec!["user 42 logged in "]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, CallSite, ColorMode, ColorScheme, Destination, DestinationFlag, Destinations,
        ErrorCallback, FailureSite, FormatFlags, Handler, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Message, Result, DEFAULT_CAPACITY,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use core::{
    Appender, CallSite, ColorMode, ColorScheme, Destination, DestinationFlag, Destinations,
    ErrorCallback, FailureSite, FormatFlags, Formatter, Handler, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Message, Result, RoutingTable, ANSI_RESET,
    DEFAULT_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
};
