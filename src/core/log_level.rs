//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level of a log call.
///
/// Levels are lookup keys into the routing table, not a threshold: there is
/// no ordering between them. Besides the standard severities the set
/// includes the service-specific levels (database, redis, memcached).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info,
    Debug,
    Warning,
    Error,
    Fatal,
    Test,
    Print,
    P,
    Other,
    Db,
    Redis,
    Memchd,
    DbOk,
    DbFail,
    RedisOk,
    RedisFail,
    MemchdOk,
    MemchdFail,
}

impl LogLevel {
    /// Every level, in declaration order
    pub const ALL: [LogLevel; 18] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Test,
        LogLevel::Print,
        LogLevel::P,
        LogLevel::Other,
        LogLevel::Db,
        LogLevel::Redis,
        LogLevel::Memchd,
        LogLevel::DbOk,
        LogLevel::DbFail,
        LogLevel::RedisOk,
        LogLevel::RedisFail,
        LogLevel::MemchdOk,
        LogLevel::MemchdFail,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Test => "TEST",
            LogLevel::Print => "PRINT",
            LogLevel::P => "P",
            LogLevel::Other => "OTHER",
            LogLevel::Db => "DB",
            LogLevel::Redis => "REDIS",
            LogLevel::Memchd => "MEMCHD",
            LogLevel::DbOk => "DB_OK",
            LogLevel::DbFail => "DB_FAIL",
            LogLevel::RedisOk => "REDIS_OK",
            LogLevel::RedisFail => "REDIS_FAIL",
            LogLevel::MemchdOk => "MEMCHD_OK",
            LogLevel::MemchdFail => "MEMCHD_FAIL",
        }
    }

    /// Levels that console output sends to stderr
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            LogLevel::Error
                | LogLevel::Fatal
                | LogLevel::DbFail
                | LogLevel::RedisFail
                | LogLevel::MemchdFail
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        if upper == "WARN" {
            return Ok(LogLevel::Warning);
        }
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.to_str() == upper)
            .ok_or_else(|| format!("Invalid log level: '{}'", s))
    }
}
