//! Core logger types and traits

pub mod appender;
pub mod color_mode;
pub mod color_scheme;
pub mod config;
pub mod destination;
pub mod error;
pub mod flags;
pub mod formatter;
pub mod hooks;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod routing;

pub use appender::Appender;
pub use color_mode::{ColorMode, DestinationFlag};
pub use color_scheme::{ColorScheme, ANSI_RESET};
pub use config::LoggerConfig;
pub use destination::{Destination, Destinations, SharedAppender};
pub use error::{LoggerError, Result};
pub use flags::FormatFlags;
pub use formatter::{CallSite, Formatter};
pub use hooks::{ErrorCallback, FailureSite};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
pub use message::Message;
pub use metrics::LoggerMetrics;
pub use routing::{Handler, Route, RoutingTable};
