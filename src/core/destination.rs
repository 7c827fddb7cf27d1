//! Destinations: where a routed message is written

use super::appender::Appender;
use super::color_mode::{ColorMode, DestinationFlag};
use super::error::Result;
use super::log_level::LogLevel;
use super::message::Message;
use crate::appenders::WriterAppender;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

/// Handle to an output sink.
///
/// Cloning shares the underlying appender, so one appender can serve many
/// (level, color mode) slots. [`Destination::Discard`] is the canonical
/// sink that swallows everything.
#[derive(Clone, Default)]
pub enum Destination {
    #[default]
    Discard,
    Appender(SharedAppender),
}

impl Destination {
    pub fn new<A: Appender + 'static>(appender: A) -> Self {
        let boxed: Box<dyn Appender> = Box::new(appender);
        Destination::Appender(Arc::new(Mutex::new(boxed)))
    }

    /// Wrap any `io::Write`
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(WriterAppender::new(writer))
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Destination::Discard)
    }

    /// True when both handles point at the same sink
    pub fn same_as(&self, other: &Destination) -> bool {
        match (self, other) {
            (Destination::Discard, Destination::Discard) => true,
            (Destination::Appender(a), Destination::Appender(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Destination::Discard => "discard".to_string(),
            Destination::Appender(appender) => appender.lock().name().to_string(),
        }
    }

    pub(crate) fn write(&self, message: &Message) -> Result<()> {
        match self {
            Destination::Discard => Ok(()),
            Destination::Appender(appender) => appender.lock().append(message),
        }
    }

    pub(crate) fn flush(&self) -> Result<()> {
        match self {
            Destination::Discard => Ok(()),
            Destination::Appender(appender) => appender.lock().flush(),
        }
    }
}

impl From<Option<Destination>> for Destination {
    fn from(dest: Option<Destination>) -> Self {
        dest.unwrap_or_default()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Discard => write!(f, "Destination::Discard"),
            Destination::Appender(appender) => {
                write!(f, "Destination::Appender({:p})", Arc::as_ptr(appender))
            }
        }
    }
}

/// Whole-table destination configuration: two sinks per level, indexed by
/// [`ColorMode`].
#[derive(Debug, Clone, Default)]
pub struct Destinations {
    entries: BTreeMap<LogLevel, [Destination; 2]>,
}

impl Destinations {
    /// Empty table; every level is undefined until inserted
    pub fn new() -> Self {
        Self::default()
    }

    /// Every level routed to the discard sink
    pub fn discard_all() -> Self {
        Self::uniform(Destination::Discard, DestinationFlag::AllOff)
    }

    /// Every level gets `dest` in the modes switched on by `flag` and the
    /// discard sink in the others
    pub fn uniform(dest: Destination, flag: DestinationFlag) -> Self {
        let entries = LogLevel::ALL
            .iter()
            .map(|level| {
                let pair = ColorMode::BOTH.map(|mode| {
                    if flag.enables(mode) {
                        dest.clone()
                    } else {
                        Destination::Discard
                    }
                });
                (*level, pair)
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel, pair: [Destination; 2]) -> Self {
        self.insert(level, pair);
        self
    }

    pub fn insert(&mut self, level: LogLevel, pair: [Destination; 2]) {
        self.entries.insert(level, pair);
    }

    pub fn get(&self, level: LogLevel, mode: ColorMode) -> Option<&Destination> {
        self.entries.get(&level).map(|pair| &pair[mode.index()])
    }

    pub fn levels(&self) -> impl Iterator<Item = LogLevel> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &[Destination; 2])> {
        self.entries.iter().map(|(level, pair)| (*level, pair))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    #[test]
    fn test_discard_identity() {
        assert!(Destination::Discard.is_discard());
        assert!(Destination::default().is_discard());
        assert!(Destination::from(None).is_discard());
        assert!(Destination::Discard.same_as(&Destination::Discard));
    }

    #[test]
    fn test_clone_shares_appender() {
        let memory = MemoryAppender::new();
        let a = Destination::new(memory.clone());
        let b = a.clone();
        let c = Destination::new(memory.clone());
        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
        assert!(!a.is_discard());

        b.write(&Message::new(LogLevel::Info, ColorMode::Plain, "hi\n"))
            .unwrap();
        assert_eq!(memory.contents(), "hi\n");
    }

    #[test]
    fn test_uniform_follows_flag() {
        let dest = Destination::new(MemoryAppender::new());
        let table = Destinations::uniform(dest.clone(), DestinationFlag::ColoredOnly);
        assert_eq!(table.len(), LogLevel::ALL.len());
        for level in LogLevel::ALL {
            assert!(table.get(level, ColorMode::Plain).unwrap().is_discard());
            assert!(table.get(level, ColorMode::Colored).unwrap().same_as(&dest));
        }
    }

    #[test]
    fn test_custom_table() {
        let dest = Destination::new(MemoryAppender::new());
        let table = Destinations::new().with_level(LogLevel::Db, [dest, Destination::Discard]);
        assert_eq!(table.levels().collect::<Vec<_>>(), vec![LogLevel::Db]);
        assert!(table.get(LogLevel::Info, ColorMode::Plain).is_none());
    }
}
