//! Main logger implementation
//!
//! Producers look up the routing entry, format the line and push it onto a
//! bounded queue together with the destination that was current at that
//! moment. One consumer thread pops messages in FIFO order and writes them.

use super::{
    color_mode::{ColorMode, DestinationFlag},
    color_scheme::ColorScheme,
    config::LoggerConfig,
    destination::{Destination, Destinations},
    error::{LoggerError, Result},
    flags::FormatFlags,
    formatter::{CallSite, Formatter},
    hooks::{report, ErrorCallback, FailureSite},
    log_level::LogLevel,
    message::Message,
    metrics::LoggerMetrics,
    routing::{Handler, Route, RoutingTable},
};
use chrono::Local;
use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// Used by [`Logger::close`] unless the builder sets another bound, and
/// when the logger is dropped without an explicit close.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default queue capacity
pub const DEFAULT_CAPACITY: usize = 1024;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A message together with the destination resolved at enqueue time
struct Envelope {
    message: Message,
    destination: Destination,
}

/// How the first close ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseOutcome {
    Drained,
    TimedOut { remaining: usize, timeout: Duration },
}

impl CloseOutcome {
    fn into_result(self) -> Result<()> {
        match self {
            CloseOutcome::Drained => Ok(()),
            CloseOutcome::TimedOut { remaining, timeout } => {
                Err(LoggerError::shutdown_timeout(remaining, timeout))
            }
        }
    }
}

enum CloseState {
    Open,
    /// The first closer drops the matching sender once the outcome is stored
    Closing(Receiver<()>),
    Closed(CloseOutcome),
}

/// Everything the controller mutates, behind one lock
struct RoutingState {
    routing: RoutingTable,
    scheme: Arc<ColorScheme>,
}

pub struct Logger {
    state: RwLock<RoutingState>,
    formatter: Formatter,
    sender: Sender<Envelope>,
    capacity: usize,
    /// Dropping the sender tells the consumer to drain and exit
    shutdown: Mutex<Option<Sender<()>>>,
    consumer: Mutex<Option<thread::JoinHandle<()>>>,
    accepting: AtomicBool,
    close_state: Mutex<CloseState>,
    /// Messages admitted (or being admitted) and not yet written
    pending: Arc<AtomicUsize>,
    sequence: AtomicU64,
    metrics: Arc<LoggerMetrics>,
    on_write_error: Option<ErrorCallback>,
    shutdown_timeout: Duration,
}

impl Logger {
    /// Create a logger and start its consumer thread
    ///
    /// `default_destination` may be `None`, in which case every slot uses
    /// the discard sink.
    ///
    /// The reported call site is the caller of the logging method. Wrappers
    /// around the logger must be marked `#[track_caller]` to report their
    /// own caller instead.
    pub fn new(
        default_destination: impl Into<Destination>,
        flag: DestinationFlag,
        capacity: usize,
        flags: FormatFlags,
        delimiter: impl Into<String>,
        color_scheme: ColorScheme,
    ) -> Result<Self> {
        Logger::builder()
            .default_destination(default_destination)
            .destination_flag(flag)
            .capacity(capacity)
            .flags(flags)
            .delimiter(delimiter)
            .color_scheme(color_scheme)
            .build()
    }

    /// Create a builder for Logger
    ///
    /// Call sites are captured with `#[track_caller]`; mark logging
    /// wrappers `#[track_caller]` so the header shows their caller.
    ///
    /// # Example
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// let memory = MemoryAppender::new();
    /// let logger = Logger::builder()
    ///     .default_destination(Destination::new(memory.clone()))
    ///     .destination_flag(DestinationFlag::PlainOnly)
    ///     .flags(FormatFlags::NONE)
    ///     .build()
    ///     .unwrap();
    ///
    /// logger.info(&[&"listening on", &8080]);
    /// logger.close().unwrap();
    /// assert_eq!(memory.contents(), "listening on 8080 \n");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn start(builder: LoggerBuilder, scheme: ColorScheme) -> Result<Self> {
        let routing = match builder.destinations {
            Some(ref table) => RoutingTable::from_destinations(table),
            None => RoutingTable::uniform(builder.default_destination.clone(), builder.destination_flag),
        };

        let (sender, receiver) = bounded(builder.capacity);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);
        let pending = Arc::new(AtomicUsize::new(0));
        let metrics = Arc::new(LoggerMetrics::new());

        let consumer = {
            let pending = Arc::clone(&pending);
            let metrics = Arc::clone(&metrics);
            let hook = builder.on_write_error.clone();
            thread::Builder::new()
                .name("logger-consumer".to_string())
                .spawn(move || Self::consume(receiver, shutdown_rx, pending, metrics, hook))
                .map_err(|e| {
                    LoggerError::io_operation("starting logger", "cannot spawn consumer thread", e)
                })?
        };

        Ok(Self {
            state: RwLock::new(RoutingState {
                routing,
                scheme: Arc::new(scheme),
            }),
            formatter: Formatter::new(builder.flags, builder.delimiter),
            sender,
            capacity: builder.capacity,
            shutdown: Mutex::new(Some(shutdown_tx)),
            consumer: Mutex::new(Some(consumer)),
            accepting: AtomicBool::new(true),
            close_state: Mutex::new(CloseState::Open),
            pending,
            sequence: AtomicU64::new(0),
            metrics,
            on_write_error: builder.on_write_error,
            shutdown_timeout: builder.shutdown_timeout,
        })
    }

    /// Consumer loop: write messages in queue order until shutdown, then
    /// write whatever is still queued and exit.
    fn consume(
        receiver: Receiver<Envelope>,
        shutdown: Receiver<()>,
        pending: Arc<AtomicUsize>,
        metrics: Arc<LoggerMetrics>,
        hook: Option<ErrorCallback>,
    ) {
        loop {
            select! {
                recv(receiver) -> envelope => match envelope {
                    Ok(envelope) => Self::deliver(envelope, &pending, &metrics, hook.as_ref()),
                    Err(_) => break,
                },
                recv(shutdown) -> _ => {
                    while let Ok(envelope) = receiver.try_recv() {
                        Self::deliver(envelope, &pending, &metrics, hook.as_ref());
                    }
                    break;
                }
            }
        }
    }

    /// Write one message with panic isolation
    ///
    /// A failing or panicking appender is reported and counted; the next
    /// message is processed normally.
    fn deliver(
        envelope: Envelope,
        pending: &AtomicUsize,
        metrics: &LoggerMetrics,
        hook: Option<&ErrorCallback>,
    ) {
        let Envelope {
            message,
            destination,
        } = envelope;

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            destination.write(&message)
        }));

        match result {
            Ok(Ok(())) => {
                metrics.record_written();
            }
            Ok(Err(e)) => {
                metrics.record_write_failure();
                Self::report_isolated(hook, FailureSite::Write(message.level), &e);
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                metrics.record_write_failure();
                Self::report_isolated(
                    hook,
                    FailureSite::Panic(message.level),
                    &LoggerError::writer(format!("{} panicked: {}", destination.name(), panic_msg)),
                );
            }
        }

        pending.fetch_sub(1, Ordering::SeqCst);
    }

    /// Run the error hook on the consumer thread; a panicking hook must not
    /// take the consumer down with it
    fn report_isolated(hook: Option<&ErrorCallback>, site: FailureSite, error: &LoggerError) {
        let reported = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            report(hook, site, error)
        }));
        if reported.is_err() {
            eprintln!("[LOGGER ERROR] Error hook panicked while reporting {} failure: {}", site, error);
        }
    }

    fn call_site(&self, location: &'static Location<'static>) -> Option<CallSite> {
        if self.formatter.wants_call_site() {
            Some(CallSite::from(location))
        } else {
            None
        }
    }

    /// Route, format and enqueue one call for each mode in `modes`
    fn dispatch(
        &self,
        level: LogLevel,
        modes: &[ColorMode],
        site: Option<CallSite>,
        values: &[&dyn Display],
    ) -> Result<()> {
        if !self.accepting.load(Ordering::SeqCst) {
            self.metrics.record_rejected();
            return Err(LoggerError::LoggerStopped);
        }

        let (routes, scheme) = {
            let state = self.state.read();
            let mut routes: Vec<(ColorMode, Route)> = Vec::with_capacity(modes.len());
            for mode in modes {
                match state.routing.route(level, *mode) {
                    Ok(route) => routes.push((*mode, route)),
                    Err(e) => {
                        self.metrics.record_rejected();
                        return Err(e);
                    }
                }
            }
            (routes, Arc::clone(&state.scheme))
        };

        let now = Local::now();
        for (mode, route) in routes {
            if !route.is_active() {
                continue;
            }
            let body = match route.handler {
                Handler::PlainWrite => self.formatter.concat(values),
                Handler::ColorWrite => {
                    self.formatter
                        .concat_colored(scheme.prefixes(level), scheme.reset(), values)
                }
                Handler::Discard => continue,
            };
            let text = self.formatter.line_at(&now, site.as_ref(), &body);
            self.enqueue(Envelope {
                message: Message::new(level, mode, text),
                destination: route.destination,
            })?;
        }
        Ok(())
    }

    /// Push onto the queue, blocking while it is full
    fn enqueue(&self, envelope: Envelope) -> Result<()> {
        // Count first, then check: close() either sees this message as
        // pending or we see that intake has stopped.
        self.pending.fetch_add(1, Ordering::SeqCst);
        if !self.accepting.load(Ordering::SeqCst) {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            self.metrics.record_rejected();
            return Err(LoggerError::LoggerStopped);
        }

        let sent = match self.sender.try_send(envelope) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(envelope)) => {
                self.metrics.record_queue_full();
                self.sender
                    .send(envelope)
                    .map_err(|_| LoggerError::ChannelSendError)
            }
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::LoggerStopped),
        };

        match sent {
            Ok(()) => {
                self.metrics.record_enqueued();
                Ok(())
            }
            Err(e) => {
                self.pending.fetch_sub(1, Ordering::SeqCst);
                self.metrics.record_rejected();
                Err(e)
            }
        }
    }

    /// Log `values` at `level` in both color modes
    #[track_caller]
    pub fn log(&self, level: LogLevel, values: &[&dyn Display]) -> Result<()> {
        let site = self.call_site(Location::caller());
        self.dispatch(level, &ColorMode::BOTH, site, values)
    }

    /// Log `values` at `level` in a single color mode
    #[track_caller]
    pub fn log_c(&self, level: LogLevel, mode: ColorMode, values: &[&dyn Display]) -> Result<()> {
        let site = self.call_site(Location::caller());
        self.dispatch(level, &[mode], site, values)
    }

    /// Log with an explicit call site; `None` prints the `???:0` placeholder
    /// when file output is enabled
    pub fn log_at(
        &self,
        site: Option<CallSite>,
        level: LogLevel,
        values: &[&dyn Display],
    ) -> Result<()> {
        self.dispatch(level, &ColorMode::BOTH, site, values)
    }

    #[track_caller]
    fn log_or_report(&self, level: LogLevel, values: &[&dyn Display]) {
        if let Err(e) = self.log(level, values) {
            report(self.on_write_error.as_ref(), FailureSite::LogCall(level), &e);
        }
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Info, values);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Debug, values);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Warning, values);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Error, values);
    }

    /// Log at Fatal level. Does not terminate the process.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Fatal, values);
    }

    #[inline]
    #[track_caller]
    pub fn test(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Test, values);
    }

    #[inline]
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Print, values);
    }

    #[inline]
    #[track_caller]
    pub fn other(&self, values: &[&dyn Display]) {
        self.log_or_report(LogLevel::Other, values);
    }

    /// Log the next value of the logger's counter (1, 2, 3, ...) at Info level
    ///
    /// Both color modes receive the same number.
    #[track_caller]
    pub fn sequence(&self) -> u64 {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        self.log_or_report(LogLevel::Info, &[&n]);
        n
    }

    // ---- controller ----

    /// Reset every known level to `dest` in the modes enabled by `flag`
    pub fn set_default_destinations(&self, dest: impl Into<Destination>, flag: DestinationFlag) {
        let table = RoutingTable::uniform(dest.into(), flag);
        self.state.write().routing = table;
    }

    /// Replace the whole routing table
    ///
    /// Levels missing from `destinations` become undefined.
    pub fn set_destinations(&self, destinations: &Destinations) {
        let table = RoutingTable::from_destinations(destinations);
        self.state.write().routing = table;
    }

    /// Replace both sinks of a level and re-derive its handlers
    pub fn set_level_destinations(&self, level: LogLevel, pair: [Destination; 2]) {
        self.state.write().routing.set_level_destinations(level, pair);
    }

    /// Replace one sink and re-derive its handler
    pub fn set_destination(
        &self,
        level: LogLevel,
        mode: ColorMode,
        dest: impl Into<Destination>,
    ) -> Result<()> {
        self.state
            .write()
            .routing
            .set_destination(level, mode, dest.into())
    }

    pub fn enable_level(&self, level: LogLevel) -> Result<()> {
        self.state.write().routing.enable_level(level)
    }

    pub fn disable_level(&self, level: LogLevel) -> Result<()> {
        self.state.write().routing.disable_level(level)
    }

    pub fn enable_level_color(&self, level: LogLevel, mode: ColorMode) -> Result<()> {
        self.state.write().routing.enable(level, mode)
    }

    pub fn disable_level_color(&self, level: LogLevel, mode: ColorMode) -> Result<()> {
        self.state.write().routing.disable(level, mode)
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        let scheme = Arc::new(scheme);
        self.state.write().scheme = scheme;
    }

    /// Switch to a named theme; an unknown name leaves the scheme unchanged
    pub fn set_color_theme_name(&self, name: &str) -> Result<()> {
        let scheme = ColorScheme::theme(name)?;
        self.set_color_scheme(scheme);
        Ok(())
    }

    // ---- inspection ----

    pub fn handler(&self, level: LogLevel, mode: ColorMode) -> Result<Handler> {
        self.state.read().routing.handler(level, mode)
    }

    pub fn routing_snapshot(&self) -> BTreeMap<LogLevel, [Handler; 2]> {
        self.state.read().routing.snapshot()
    }

    pub fn color_scheme(&self) -> Arc<ColorScheme> {
        Arc::clone(&self.state.read().scheme)
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Messages currently waiting in the queue
    pub fn queue_len(&self) -> usize {
        self.sender.len()
    }

    /// True once a close has started
    pub fn is_closed(&self) -> bool {
        !matches!(*self.close_state.lock(), CloseState::Open)
    }

    // ---- shutdown ----

    /// Stop intake and drain the queue within the configured timeout
    pub fn close(&self) -> Result<()> {
        self.close_with_timeout(self.shutdown_timeout)
    }

    /// Stop intake and drain the queue within `timeout`
    ///
    /// Every message admitted before the call is written unless the bound
    /// elapses first, in which case [`LoggerError::ShutdownTimeout`] reports
    /// how many were still pending; those may be lost.
    ///
    /// Only the first call drains. A call made while that drain is running
    /// waits for it, up to its own `timeout`, and later calls return the
    /// first call's result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_leveled_logger::prelude::*;
    /// use std::time::Duration;
    ///
    /// let logger = Logger::builder().build().unwrap();
    /// logger.info(&[&"Important message"]);
    ///
    /// if let Err(e) = logger.close_with_timeout(Duration::from_secs(10)) {
    ///     eprintln!("Warning: {}", e);
    /// }
    /// ```
    pub fn close_with_timeout(&self, timeout: Duration) -> Result<()> {
        let (done_tx, done_rx) = bounded::<()>(0);
        {
            let mut state = self.close_state.lock();
            let in_progress = match &*state {
                CloseState::Open => None,
                CloseState::Closing(done) => Some(done.clone()),
                CloseState::Closed(outcome) => return outcome.into_result(),
            };
            match in_progress {
                Some(done) => {
                    drop(state);
                    return self.wait_for_close(&done, timeout);
                }
                None => *state = CloseState::Closing(done_rx),
            }
        }

        let outcome = self.drain(timeout);
        *self.close_state.lock() = CloseState::Closed(outcome);
        drop(done_tx);
        outcome.into_result()
    }

    /// Wait for another thread's close to finish
    fn wait_for_close(&self, done: &Receiver<()>, timeout: Duration) -> Result<()> {
        match done.recv_timeout(timeout) {
            Err(RecvTimeoutError::Timeout) => Err(LoggerError::shutdown_timeout(
                self.pending.load(Ordering::SeqCst),
                timeout,
            )),
            _ => match &*self.close_state.lock() {
                CloseState::Closed(outcome) => outcome.into_result(),
                _ => Err(LoggerError::shutdown_timeout(
                    self.pending.load(Ordering::SeqCst),
                    timeout,
                )),
            },
        }
    }

    /// Stop intake, wait for the queue to empty, stop the consumer
    fn drain(&self, timeout: Duration) -> CloseOutcome {
        self.accepting.store(false, Ordering::SeqCst);

        let start = Instant::now();
        let drained = loop {
            if self.pending.load(Ordering::SeqCst) == 0 {
                break true;
            }
            if start.elapsed() >= timeout {
                break false;
            }
            thread::sleep(DRAIN_POLL_INTERVAL);
        };

        drop(self.shutdown.lock().take());

        if !drained {
            // The consumer may be stuck in a write; leave it detached.
            drop(self.consumer.lock().take());
            return CloseOutcome::TimedOut {
                remaining: self.pending.load(Ordering::SeqCst),
                timeout,
            };
        }

        let grace = timeout
            .saturating_sub(start.elapsed())
            .max(Duration::from_millis(100));
        self.join_consumer(Instant::now() + grace);
        self.flush_sinks();
        CloseOutcome::Drained
    }

    fn join_consumer(&self, deadline: Instant) {
        let Some(handle) = self.consumer.lock().take() else {
            return;
        };
        loop {
            if handle.is_finished() {
                if handle.join().is_err() {
                    eprintln!("[LOGGER ERROR] Consumer thread panicked during shutdown");
                }
                return;
            }
            if Instant::now() >= deadline {
                eprintln!("[LOGGER WARNING] Consumer thread did not exit before the close deadline");
                return;
            }
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn flush_sinks(&self) {
        let sinks = self.state.read().routing.sinks();
        for sink in sinks {
            if let Err(e) = sink.flush() {
                report(self.on_write_error.as_ref(), FailureSite::Flush, &e);
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // an explicit close already reported its own outcome
        if !self.is_closed() {
            if let Err(e) = self.close() {
                eprintln!("[LOGGER WARNING] {}. Some logs may be lost.", e);
            }
        }

        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .default_destination(Destination::new(ConsoleAppender::new()))
///     .destination_flag(DestinationFlag::Both)
///     .capacity(256)
///     .flags(FormatFlags::STD_FLAGS | FormatFlags::SHORT_FILE)
///     .delimiter(" ")
///     .color_theme("bright")
///     .on_write_error(Arc::new(|site: FailureSite, err: &LoggerError| {
///         eprintln!("ALERT: {} failed: {}", site, err);
///     }))
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    default_destination: Destination,
    destination_flag: DestinationFlag,
    destinations: Option<Destinations>,
    capacity: usize,
    flags: FormatFlags,
    delimiter: String,
    color_scheme: Option<ColorScheme>,
    color_theme: Option<String>,
    shutdown_timeout: Duration,
    on_write_error: Option<ErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            default_destination: Destination::Discard,
            destination_flag: DestinationFlag::default(),
            destinations: None,
            capacity: DEFAULT_CAPACITY,
            flags: FormatFlags::STD_FLAGS,
            delimiter: " ".to_string(),
            color_scheme: None,
            color_theme: None,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            on_write_error: None,
        }
    }

    /// Builder seeded from a loaded configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Ok(Self::new()
            .capacity(config.capacity)
            .flags(config.format_flags()?)
            .delimiter(config.delimiter.clone())
            .color_theme(config.theme.clone())
            .destination_flag(config.destination_flag)
            .shutdown_timeout(config.shutdown_timeout()))
    }

    /// Sink used for every level; `None` means discard
    #[must_use = "builder methods return a new value"]
    pub fn default_destination(mut self, dest: impl Into<Destination>) -> Self {
        self.default_destination = dest.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination_flag(mut self, flag: DestinationFlag) -> Self {
        self.destination_flag = flag;
        self
    }

    /// Explicit table; overrides the default destination and flag
    #[must_use = "builder methods return a new value"]
    pub fn destinations(mut self, destinations: Destinations) -> Self {
        self.destinations = Some(destinations);
        self
    }

    /// Queue capacity; fixed for the life of the logger
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Explicit scheme; takes precedence over [`LoggerBuilder::color_theme`]
    #[must_use = "builder methods return a new value"]
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_theme(mut self, name: impl Into<String>) -> Self {
        self.color_theme = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Set a callback for write failures and refused log calls
    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, callback: ErrorCallback) -> Self {
        self.on_write_error = Some(callback);
        self
    }

    /// Build the Logger and start its consumer thread
    pub fn build(mut self) -> Result<Logger> {
        if self.capacity == 0 {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "queue capacity must be at least 1",
            ));
        }

        let scheme = match (self.color_scheme.take(), self.color_theme.take()) {
            (Some(scheme), _) => scheme,
            (None, Some(name)) => ColorScheme::theme(&name)?,
            (None, None) => ColorScheme::theme("default")?,
        };

        Logger::start(self, scheme)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    fn memory_logger(flag: DestinationFlag) -> (Logger, MemoryAppender) {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .default_destination(Destination::new(memory.clone()))
            .destination_flag(flag)
            .capacity(16)
            .flags(FormatFlags::NONE)
            .color_scheme(ColorScheme::new("RESET").with_level(LogLevel::Info, ["RED", "GREEN"]))
            .build()
            .unwrap();
        (logger, memory)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build().unwrap();
        assert_eq!(logger.capacity(), DEFAULT_CAPACITY);
        assert_eq!(logger.formatter().flags(), FormatFlags::STD_FLAGS);
        assert_eq!(logger.formatter().delimiter(), " ");
        // default destination is discard
        assert!(logger
            .routing_snapshot()
            .values()
            .all(|pair| pair.iter().all(|h| h.is_discard())));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Logger::builder().capacity(0).build().err().unwrap();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_unknown_theme_rejected_at_build() {
        let err = Logger::builder().color_theme("neon").build().err().unwrap();
        assert!(matches!(err, LoggerError::UnknownColorTheme(_)));
    }

    #[test]
    fn test_none_default_destination_discards() {
        let logger = Logger::new(
            None::<Destination>,
            DestinationFlag::Both,
            4,
            FormatFlags::NONE,
            " ",
            ColorScheme::default(),
        )
        .unwrap();
        logger.info(&[&"nothing"]);
        logger.close().unwrap();
        assert_eq!(logger.metrics().enqueued(), 0);
    }

    #[test]
    fn test_plain_and_colored_lines() {
        let (logger, memory) = memory_logger(DestinationFlag::Both);
        logger.info(&[&"a", &"b", &"c"]);
        logger.close().unwrap();
        assert_eq!(memory.lines(), vec!["a b c ", "REDa GREENb c RESET"]);
    }

    #[test]
    fn test_log_c_single_mode() {
        let (logger, memory) = memory_logger(DestinationFlag::Both);
        logger
            .log_c(LogLevel::Info, ColorMode::Colored, &[&"only"])
            .unwrap();
        logger.close().unwrap();
        assert_eq!(memory.lines(), vec!["REDonly RESET"]);
    }

    #[test]
    fn test_sequence_logs_same_number_in_both_modes() {
        let (logger, memory) = memory_logger(DestinationFlag::Both);
        assert_eq!(logger.sequence(), 1);
        assert_eq!(logger.sequence(), 2);
        logger.close().unwrap();
        assert_eq!(
            memory.lines(),
            vec!["1 ", "RED1 RESET", "2 ", "RED2 RESET"]
        );
    }

    #[test]
    fn test_call_site_is_callers_file() {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .default_destination(Destination::new(memory.clone()))
            .flags(FormatFlags::SHORT_FILE)
            .build()
            .unwrap();
        logger.warning(&[&"here"]);
        logger.close().unwrap();
        let line = memory.lines().remove(0);
        assert!(line.starts_with("logger.rs:"), "unexpected line {:?}", line);
        assert!(line.ends_with(": here "));
    }

    #[test]
    fn test_log_at_unknown_site() {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .default_destination(Destination::new(memory.clone()))
            .flags(FormatFlags::LONG_FILE)
            .build()
            .unwrap();
        logger.log_at(None, LogLevel::Db, &[&"q"]).unwrap();
        logger.close().unwrap();
        assert_eq!(memory.lines(), vec!["???:0: q "]);
    }

    #[test]
    fn test_log_after_close_is_rejected() {
        let (logger, memory) = memory_logger(DestinationFlag::PlainOnly);
        logger.close().unwrap();
        assert!(matches!(
            logger.log(LogLevel::Info, &[&"late"]),
            Err(LoggerError::LoggerStopped)
        ));
        assert!(logger.is_closed());
        assert_eq!(logger.metrics().rejected(), 1);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_repeated_close_returns_first_outcome() {
        let (logger, memory) = memory_logger(DestinationFlag::PlainOnly);
        logger.info(&[&"once"]);
        assert!(logger.close().is_ok());
        assert!(logger.close().is_ok());
        assert!(logger.close_with_timeout(Duration::ZERO).is_ok());
        assert_eq!(memory.lines(), vec!["once "]);
    }

    #[test]
    fn test_close_outcome_into_result() {
        assert!(CloseOutcome::Drained.into_result().is_ok());
        let timed_out = CloseOutcome::TimedOut {
            remaining: 3,
            timeout: Duration::from_millis(20),
        };
        assert!(matches!(
            timed_out.into_result(),
            Err(LoggerError::ShutdownTimeout { remaining: 3, .. })
        ));
    }

    #[test]
    fn test_undefined_level_after_table_replacement() {
        let (logger, memory) = memory_logger(DestinationFlag::PlainOnly);
        logger.set_destinations(
            &Destinations::new().with_level(
                LogLevel::Db,
                [Destination::new(memory.clone()), Destination::Discard],
            ),
        );
        assert!(matches!(
            logger.log(LogLevel::Info, &[&"x"]),
            Err(LoggerError::UndefinedLevel(LogLevel::Info))
        ));
        assert!(logger.enable_level(LogLevel::Info).is_err());
        logger.log(LogLevel::Db, &[&"select"]).unwrap();
        logger.close().unwrap();
        assert_eq!(memory.lines(), vec!["select "]);
    }

    #[test]
    fn test_color_theme_switch() {
        let (logger, _memory) = memory_logger(DestinationFlag::Both);
        let before = logger.color_scheme();
        assert!(logger.set_color_theme_name("nope").is_err());
        assert_eq!(*logger.color_scheme(), *before);

        logger.set_color_theme_name("monochrome").unwrap();
        assert_eq!(logger.color_scheme().reset(), "");
    }
}
