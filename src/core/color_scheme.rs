//! Color schemes for colored output
//!
//! A scheme maps each level to an ordered list of ANSI prefixes. The n-th
//! prefix precedes the n-th value of a message; values past the end of the
//! list get no prefix. One reset sequence closes the whole message.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ANSI sequence that restores the terminal's default attributes
pub const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorScheme {
    prefixes: HashMap<LogLevel, Vec<String>>,
    reset: String,
}

impl ColorScheme {
    /// Names accepted by [`ColorScheme::theme`]
    pub const THEMES: [&'static str; 3] = ["default", "bright", "monochrome"];

    /// Empty scheme with the given reset sequence
    pub fn new(reset: impl Into<String>) -> Self {
        Self {
            prefixes: HashMap::new(),
            reset: reset.into(),
        }
    }

    #[must_use]
    pub fn with_level<I, S>(mut self, level: LogLevel, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_level(level, prefixes);
        self
    }

    pub fn set_level<I, S>(&mut self, level: LogLevel, prefixes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes
            .insert(level, prefixes.into_iter().map(Into::into).collect());
    }

    /// Prefixes for `level`; empty when the scheme has no entry
    pub fn prefixes(&self, level: LogLevel) -> &[String] {
        self.prefixes.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reset(&self) -> &str {
        &self.reset
    }

    /// Build one of the named themes
    ///
    /// # Example
    ///
    /// ```
    /// use rust_leveled_logger::{ColorScheme, LogLevel};
    ///
    /// let scheme = ColorScheme::theme("default").unwrap();
    /// assert!(!scheme.prefixes(LogLevel::Error).is_empty());
    /// assert!(ColorScheme::theme("neon").is_err());
    /// ```
    pub fn theme(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "default" => Ok(Self::default_theme()),
            "bright" => Ok(Self::bright_theme()),
            "monochrome" => Ok(Self::new("")),
            _ => Err(LoggerError::unknown_theme(name)),
        }
    }

    fn default_theme() -> Self {
        use Color::*;
        Self::new(ANSI_RESET)
            .with_level(LogLevel::Info, paint([Green, White]))
            .with_level(LogLevel::Debug, paint([Blue, White]))
            .with_level(LogLevel::Warning, paint([Yellow, White]))
            .with_level(LogLevel::Error, paint([Red, White]))
            .with_level(LogLevel::Fatal, paint([Red, Red]))
            .with_level(LogLevel::Test, paint([Magenta, White]))
            .with_level(LogLevel::Print, paint([White]))
            .with_level(LogLevel::P, paint([White]))
            .with_level(LogLevel::Other, paint([White]))
            .with_level(LogLevel::Db, paint([Cyan, White]))
            .with_level(LogLevel::Redis, paint([Cyan, White]))
            .with_level(LogLevel::Memchd, paint([Cyan, White]))
            .with_level(LogLevel::DbOk, paint([Cyan, Green]))
            .with_level(LogLevel::DbFail, paint([Cyan, Red]))
            .with_level(LogLevel::RedisOk, paint([Cyan, Green]))
            .with_level(LogLevel::RedisFail, paint([Cyan, Red]))
            .with_level(LogLevel::MemchdOk, paint([Cyan, Green]))
            .with_level(LogLevel::MemchdFail, paint([Cyan, Red]))
    }

    fn bright_theme() -> Self {
        use Color::*;
        Self::new(ANSI_RESET)
            .with_level(LogLevel::Info, paint([BrightGreen, BrightWhite]))
            .with_level(LogLevel::Debug, paint([BrightBlue, BrightWhite]))
            .with_level(LogLevel::Warning, paint([BrightYellow, BrightWhite]))
            .with_level(LogLevel::Error, paint([BrightRed, BrightWhite]))
            .with_level(LogLevel::Fatal, paint([BrightRed, BrightRed]))
            .with_level(LogLevel::Test, paint([BrightMagenta, BrightWhite]))
            .with_level(LogLevel::Print, paint([BrightWhite]))
            .with_level(LogLevel::P, paint([BrightWhite]))
            .with_level(LogLevel::Other, paint([BrightWhite]))
            .with_level(LogLevel::Db, paint([BrightCyan, BrightWhite]))
            .with_level(LogLevel::Redis, paint([BrightCyan, BrightWhite]))
            .with_level(LogLevel::Memchd, paint([BrightCyan, BrightWhite]))
            .with_level(LogLevel::DbOk, paint([BrightCyan, BrightGreen]))
            .with_level(LogLevel::DbFail, paint([BrightCyan, BrightRed]))
            .with_level(LogLevel::RedisOk, paint([BrightCyan, BrightGreen]))
            .with_level(LogLevel::RedisFail, paint([BrightCyan, BrightRed]))
            .with_level(LogLevel::MemchdOk, paint([BrightCyan, BrightGreen]))
            .with_level(LogLevel::MemchdFail, paint([BrightCyan, BrightRed]))
    }
}

fn paint<const N: usize>(colors: [Color; N]) -> [String; N] {
    colors.map(foreground)
}

/// ANSI foreground escape for a color
pub fn foreground(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_sequence() {
        assert_eq!(foreground(Color::Red), "\x1b[31m");
        assert_eq!(foreground(Color::BrightGreen), "\x1b[92m");
    }

    #[test]
    fn test_every_level_has_prefixes_in_default_theme() {
        let scheme = ColorScheme::theme("default").unwrap();
        for level in LogLevel::ALL {
            assert!(!scheme.prefixes(level).is_empty(), "{} has no prefixes", level);
        }
        assert_eq!(scheme.reset(), ANSI_RESET);
    }

    #[test]
    fn test_theme_names_case_insensitive() {
        for name in ColorScheme::THEMES {
            assert!(ColorScheme::theme(name).is_ok());
            assert!(ColorScheme::theme(&name.to_uppercase()).is_ok());
        }
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let err = ColorScheme::theme("solarized").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownColorTheme(ref n) if n == "solarized"));
    }

    #[test]
    fn test_monochrome_is_empty() {
        let scheme = ColorScheme::theme("monochrome").unwrap();
        assert!(scheme.prefixes(LogLevel::Info).is_empty());
        assert_eq!(scheme.reset(), "");
    }

    #[test]
    fn test_explicit_scheme() {
        let scheme = ColorScheme::new("RESET").with_level(LogLevel::Info, ["RED", "GREEN"]);
        assert_eq!(scheme.prefixes(LogLevel::Info), ["RED", "GREEN"]);
        assert!(scheme.prefixes(LogLevel::Debug).is_empty());
    }
}
