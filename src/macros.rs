//! Logging macros for variadic log calls.
//!
//! Each macro takes the logger followed by any number of `Display` values
//! and builds the `&[&dyn Display]` list at the call site, so the reported
//! file and line are the macro's.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::info;
//!
//! let logger = Logger::builder().build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Several columns
//! let port = 8080;
//! info!(logger, "listening on", port);
//!
//! // Expressions are fine too
//! let user_id = 42;
//! info!(logger, "user", user_id, "action", format!("{}-{}", "log", "in"));
//! ```

/// Log values at a level in both color modes. Evaluates to `Result<()>`.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::DbFail, "query failed, code", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $logger.log($level, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log values at a level in one color mode. Evaluates to `Result<()>`.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::log_c;
/// log_c!(logger, LogLevel::Warning, ColorMode::Colored, "disk", "90%").unwrap();
/// ```
#[macro_export]
macro_rules! log_c {
    ($logger:expr, $level:expr, $mode:expr $(, $value:expr)* $(,)?) => {
        $logger.log_c($level, $mode, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::warning;
/// warning!(logger, "Memory usage high:", 85, "%");
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warning(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a fatal-level message. The process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.fatal(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a test-level message.
#[macro_export]
macro_rules! test_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.test(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a print-level message.
#[macro_export]
macro_rules! print_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.print(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log an other-level message.
#[macro_export]
macro_rules! other {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.other(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
