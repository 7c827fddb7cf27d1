//! Header formatting flags
//!
//! Bits are or'ed together to choose what precedes every message.
//! `DATE | TIME` produces `2009/01/23 01:23:23 message`, while
//! `DATE | TIME | MICROSECONDS | LONG_FILE` produces
//! `2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatFlags(u32);

impl FormatFlags {
    pub const NONE: FormatFlags = FormatFlags(0);
    /// Date in the local time zone: `2009/01/23`
    pub const DATE: FormatFlags = FormatFlags(1 << 0);
    /// Time in the local time zone: `01:23:23`
    pub const TIME: FormatFlags = FormatFlags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: FormatFlags = FormatFlags(1 << 2);
    /// Full file path and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: FormatFlags = FormatFlags(1 << 3);
    /// Final path element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: FormatFlags = FormatFlags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: FormatFlags = FormatFlags(1 << 5);
    /// Never consult the call site
    pub const NO_STACK_TRACE: FormatFlags = FormatFlags(1 << 6);

    pub const STD_FLAGS: FormatFlags = FormatFlags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, FormatFlags); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("long_file", Self::LONG_FILE),
        ("short_file", Self::SHORT_FILE),
        ("utc", Self::UTC),
        ("no_stack_trace", Self::NO_STACK_TRACE),
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        FormatFlags(bits)
    }

    /// True if every bit of `other` is set
    #[inline]
    pub const fn contains(self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set
    #[inline]
    pub const fn intersects(self, other: FormatFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// Look up a single flag by its configuration name (`"short_file"`, ...)
    pub fn from_name(name: &str) -> Option<FormatFlags> {
        let lower = name.to_lowercase();
        if lower == "std" || lower == "std_flags" {
            return Some(Self::STD_FLAGS);
        }
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, flag)| *flag)
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: FormatFlags) -> FormatFlags {
        FormatFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: FormatFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FormatFlags {
    type Output = FormatFlags;

    fn bitand(self, rhs: FormatFlags) -> FormatFlags {
        FormatFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}
