//! Routing table: (level, color mode) -> handler + destination
//!
//! Every level present in the table has exactly two entries, one per
//! [`ColorMode`]. A level missing from the table is an error on every
//! access, it is never treated as disabled.

use super::color_mode::{ColorMode, DestinationFlag};
use super::destination::{Destination, Destinations};
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// What happens to a message routed to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handler {
    Discard,
    PlainWrite,
    ColorWrite,
}

impl Handler {
    /// Write handler that matches a color mode
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Plain => Handler::PlainWrite,
            ColorMode::Colored => Handler::ColorWrite,
        }
    }

    /// Handler implied by installing `dest` in the `mode` slot
    pub fn derive(mode: ColorMode, dest: &Destination) -> Self {
        if dest.is_discard() {
            Handler::Discard
        } else {
            Self::for_mode(mode)
        }
    }

    pub fn is_discard(self) -> bool {
        self == Handler::Discard
    }
}

/// Snapshot of one entry taken at lookup time
#[derive(Debug, Clone)]
pub struct Route {
    pub handler: Handler,
    pub destination: Destination,
}

impl Route {
    fn derived(mode: ColorMode, destination: Destination) -> Self {
        Self {
            handler: Handler::derive(mode, &destination),
            destination,
        }
    }

    /// Whether a message on this route reaches a real sink
    pub fn is_active(&self) -> bool {
        !self.handler.is_discard() && !self.destination.is_discard()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    entries: HashMap<LogLevel, [Route; 2]>,
}

impl RoutingTable {
    /// Table with handlers derived from each destination
    pub fn from_destinations(destinations: &Destinations) -> Self {
        let entries = destinations
            .iter()
            .map(|(level, pair)| (level, Self::derive_pair(pair.clone())))
            .collect();
        Self { entries }
    }

    pub fn uniform(dest: Destination, flag: DestinationFlag) -> Self {
        Self::from_destinations(&Destinations::uniform(dest, flag))
    }

    fn derive_pair(pair: [Destination; 2]) -> [Route; 2] {
        let [plain, colored] = pair;
        [
            Route::derived(ColorMode::Plain, plain),
            Route::derived(ColorMode::Colored, colored),
        ]
    }

    fn pair_mut(&mut self, level: LogLevel) -> Result<&mut [Route; 2]> {
        self.entries
            .get_mut(&level)
            .ok_or(LoggerError::UndefinedLevel(level))
    }

    pub fn contains(&self, level: LogLevel) -> bool {
        self.entries.contains_key(&level)
    }

    /// Snapshot of the entry for `(level, mode)`
    pub fn route(&self, level: LogLevel, mode: ColorMode) -> Result<Route> {
        self.entries
            .get(&level)
            .map(|pair| pair[mode.index()].clone())
            .ok_or(LoggerError::UndefinedLevel(level))
    }

    pub fn handler(&self, level: LogLevel, mode: ColorMode) -> Result<Handler> {
        self.entries
            .get(&level)
            .map(|pair| pair[mode.index()].handler)
            .ok_or(LoggerError::UndefinedLevel(level))
    }

    /// Replace one sink and re-derive its handler
    pub fn set_destination(
        &mut self,
        level: LogLevel,
        mode: ColorMode,
        dest: Destination,
    ) -> Result<()> {
        let pair = self.pair_mut(level)?;
        pair[mode.index()] = Route::derived(mode, dest);
        Ok(())
    }

    /// Replace both sinks of a level, defining the level if needed
    pub fn set_level_destinations(&mut self, level: LogLevel, pair: [Destination; 2]) {
        self.entries.insert(level, Self::derive_pair(pair));
    }

    /// Restore the writing handler of one slot
    ///
    /// A slot whose destination is the discard sink stays `Discard`.
    pub fn enable(&mut self, level: LogLevel, mode: ColorMode) -> Result<()> {
        let route = &mut self.pair_mut(level)?[mode.index()];
        route.handler = Handler::derive(mode, &route.destination);
        Ok(())
    }

    pub fn disable(&mut self, level: LogLevel, mode: ColorMode) -> Result<()> {
        self.pair_mut(level)?[mode.index()].handler = Handler::Discard;
        Ok(())
    }

    pub fn enable_level(&mut self, level: LogLevel) -> Result<()> {
        let pair = self.pair_mut(level)?;
        for mode in ColorMode::BOTH {
            let route = &mut pair[mode.index()];
            route.handler = Handler::derive(mode, &route.destination);
        }
        Ok(())
    }

    pub fn disable_level(&mut self, level: LogLevel) -> Result<()> {
        let pair = self.pair_mut(level)?;
        for route in pair.iter_mut() {
            route.handler = Handler::Discard;
        }
        Ok(())
    }

    /// Handlers of every defined level, for inspection
    pub fn snapshot(&self) -> BTreeMap<LogLevel, [Handler; 2]> {
        self.entries
            .iter()
            .map(|(level, pair)| (*level, [pair[0].handler, pair[1].handler]))
            .collect()
    }

    /// Distinct non-discard destinations in the table
    pub fn sinks(&self) -> Vec<Destination> {
        let mut sinks: Vec<Destination> = Vec::new();
        for route in self.entries.values().flatten() {
            if route.destination.is_discard() {
                continue;
            }
            if !sinks.iter().any(|s| s.same_as(&route.destination)) {
                sinks.push(route.destination.clone());
            }
        }
        sinks
    }
}
