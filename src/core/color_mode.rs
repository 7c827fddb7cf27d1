//! Color mode and destination flag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering of a message: plain text or ANSI-colorized.
///
/// Every level has one routing entry per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Plain = 0,
    Colored = 1,
}

impl ColorMode {
    pub const BOTH: [ColorMode; 2] = [ColorMode::Plain, ColorMode::Colored];

    /// Slot index inside a per-level pair
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Plain => write!(f, "plain"),
            ColorMode::Colored => write!(f, "colored"),
        }
    }
}

/// Which color modes receive the default destination on (re)initialisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationFlag {
    AllOff,
    #[default]
    PlainOnly,
    ColoredOnly,
    Both,
}

impl DestinationFlag {
    /// Whether the given mode is switched on by this flag
    pub fn enables(self, mode: ColorMode) -> bool {
        match (self, mode) {
            (DestinationFlag::Both, _) => true,
            (DestinationFlag::PlainOnly, ColorMode::Plain) => true,
            (DestinationFlag::ColoredOnly, ColorMode::Colored) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_enables() {
        assert!(!DestinationFlag::AllOff.enables(ColorMode::Plain));
        assert!(!DestinationFlag::AllOff.enables(ColorMode::Colored));
        assert!(DestinationFlag::PlainOnly.enables(ColorMode::Plain));
        assert!(!DestinationFlag::PlainOnly.enables(ColorMode::Colored));
        assert!(!DestinationFlag::ColoredOnly.enables(ColorMode::Plain));
        assert!(DestinationFlag::ColoredOnly.enables(ColorMode::Colored));
        assert!(DestinationFlag::Both.enables(ColorMode::Plain));
        assert!(DestinationFlag::Both.enables(ColorMode::Colored));
    }

    #[test]
    fn test_mode_index() {
        assert_eq!(ColorMode::Plain.index(), 0);
        assert_eq!(ColorMode::Colored.index(), 1);
    }
}
