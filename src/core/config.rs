//! Serializable logger configuration

use super::color_mode::DestinationFlag;
use super::error::{LoggerError, Result};
use super::flags::FormatFlags;
use super::logger::{DEFAULT_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Logger settings that can be loaded from JSON.
///
/// Destinations are runtime objects and are not part of the file; they are
/// supplied to the builder separately.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::LoggerConfig;
///
/// let config = LoggerConfig::from_json(r#"{"capacity": 64, "flags": ["time", "short_file"]}"#).unwrap();
/// assert_eq!(config.capacity, 64);
/// assert_eq!(config.delimiter, " ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub capacity: usize,
    /// Flag names, see [`FormatFlags::from_name`]
    pub flags: Vec<String>,
    pub delimiter: String,
    pub theme: String,
    pub destination_flag: DestinationFlag,
    pub shutdown_timeout_ms: u64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            flags: vec!["date".to_string(), "time".to_string()],
            delimiter: " ".to_string(),
            theme: "default".to_string(),
            destination_flag: DestinationFlag::default(),
            shutdown_timeout_ms: DEFAULT_SHUTDOWN_TIMEOUT.as_millis() as u64,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger config", path.display().to_string(), e)
        })?;
        Self::from_json(&json)
    }

    /// Combined flags; an unknown name is a configuration error
    pub fn format_flags(&self) -> Result<FormatFlags> {
        self.flags.iter().try_fold(FormatFlags::NONE, |acc, name| {
            FormatFlags::from_name(name)
                .map(|flag| acc | flag)
                .ok_or_else(|| LoggerError::config("LoggerConfig", format!("unknown flag '{}'", name)))
        })
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}
