//! Process-wide logging state
//!
//! A [`Registry`] owns everything loggers share: the global threshold, the
//! global message counter and start instant, the optional name filter, the
//! logger id counter and the ordered set of printers.
//!
//! One registry per process is reachable through [`Registry::global`]. It is
//! created on first access and lives until the process exits. Tests and
//! embedders that want isolation build their own with [`Registry::builder`].
//!
//! Printers run without the printer set locked, so a printer may log through
//! the same registry or register further printers. A message emitted from
//! inside a printer's own `print` call skips that printer.

use super::{
    config::RegistryBuilder,
    directive,
    error::Result,
    logger::Logger,
    name_filter::{CompiledFilter, NameFilter},
    printer::Printer,
    record::Record,
    severity::Severity,
};
use crate::printers::{self, ConsolePrinter};
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// One registered printer. The lock is held by the dispatching thread for
/// the duration of `print`; the cell catches re-entry from that same call.
type PrinterSlot = Arc<ReentrantMutex<RefCell<Box<dyn Printer>>>>;

fn slot(printer: Box<dyn Printer>) -> PrinterSlot {
    Arc::new(ReentrantMutex::new(RefCell::new(printer)))
}

pub struct Registry {
    initial_threshold: Severity,
    threshold: RwLock<Severity>,
    message_count: AtomicU64,
    started_at: Mutex<Option<Instant>>,
    name_filter: RwLock<Option<CompiledFilter>>,
    next_logger_id: AtomicU64,
    printers: Mutex<Vec<PrinterSlot>>,
}

impl Registry {
    /// Registry with the default threshold and a console printer
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            Severity::default(),
            None,
            vec![Box::new(ConsolePrinter::new())],
        )
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        threshold: Severity,
        name_filter: Option<CompiledFilter>,
        printers: Vec<Box<dyn Printer>>,
    ) -> Self {
        Self {
            initial_threshold: threshold,
            threshold: RwLock::new(threshold),
            message_count: AtomicU64::new(0),
            started_at: Mutex::new(None),
            name_filter: RwLock::new(name_filter),
            next_logger_id: AtomicU64::new(0),
            printers: Mutex::new(printers.into_iter().map(slot).collect()),
        }
    }

    /// The process-wide registry.
    ///
    /// Its initial threshold comes from the `BROLOG` environment variable when
    /// that names a level, otherwise the default. It starts with a console
    /// printer.
    pub fn global() -> &'static Arc<Registry> {
        GLOBAL.get_or_init(|| {
            Arc::new(Self::from_parts(
                startup_threshold(),
                None,
                vec![Box::new(ConsolePrinter::new())],
            ))
        })
    }

    /// Create a named logger bound to this registry
    pub fn logger(self: &Arc<Self>, name: impl Into<String>) -> Logger {
        Logger::with_registry(Arc::clone(self), Some(name.into()))
    }

    /// Create a logger named after its id
    pub fn anonymous_logger(self: &Arc<Self>) -> Logger {
        Logger::with_registry(Arc::clone(self), None)
    }

    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    pub fn set_threshold(&self, level: Severity) {
        *self.threshold.write() = level;
    }

    pub fn set_debug(&self) {
        self.set_threshold(Severity::Debug);
    }

    pub fn set_info(&self) {
        self.set_threshold(Severity::Info);
    }

    pub fn set_warn(&self) {
        self.set_threshold(Severity::Warn);
    }

    /// Alias for [`Registry::set_info`]
    pub fn set_inf(&self) {
        self.set_info();
    }

    /// Alias for [`Registry::set_info`]
    pub fn set_log(&self) {
        self.set_info();
    }

    pub fn set_error(&self) {
        self.set_threshold(Severity::Error);
    }

    /// Alias for [`Registry::set_error`]
    pub fn set_err(&self) {
        self.set_error();
    }

    /// Suppress every logger, whatever its own threshold
    pub fn off(&self) {
        self.set_threshold(Severity::Off);
    }

    /// Only loggers whose whole name matches `filter` may emit.
    ///
    /// # Example
    ///
    /// ```
    /// use brolog::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.set_name_filter("db|cache").unwrap();
    /// assert_eq!(registry.name_filter().as_deref(), Some("db|cache"));
    ///
    /// assert!(registry.set_name_filter("db(").is_err());
    /// ```
    pub fn set_name_filter(&self, filter: impl Into<NameFilter>) -> Result<()> {
        let compiled = filter.into().compile()?;
        *self.name_filter.write() = Some(compiled);
        Ok(())
    }

    pub fn clear_name_filter(&self) {
        *self.name_filter.write() = None;
    }

    pub fn name_filter(&self) -> Option<String> {
        self.name_filter
            .read()
            .as_ref()
            .map(|f| f.source().to_string())
    }

    /// Append a printer to the printer set
    pub fn register_printer<P: Printer + 'static>(&self, printer: P) {
        self.register_boxed(Box::new(printer));
    }

    pub fn register_boxed(&self, printer: Box<dyn Printer>) {
        self.printers.lock().push(slot(printer));
    }

    /// Append a built-in printer by kind name (`console`, `console-plain`,
    /// `stdout`, `json`)
    pub fn register_printer_named(&self, name: &str) -> Result<()> {
        let printer = printers::by_name(name)?;
        self.register_boxed(printer);
        Ok(())
    }

    pub fn printer_count(&self) -> usize {
        self.printers.lock().len()
    }

    /// Number of messages allowed so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::Relaxed)
    }

    /// Instant of the first allowed message, if any
    pub fn started_at(&self) -> Option<Instant> {
        *self.started_at.lock()
    }

    /// Restore the counters, start instant, threshold and name filter to
    /// their initial state. Printers and logger ids are left alone.
    pub fn reset(&self) {
        self.set_threshold(self.initial_threshold);
        self.message_count.store(0, Ordering::Relaxed);
        *self.started_at.lock() = None;
        self.clear_name_filter();
    }

    pub(crate) fn next_logger_id(&self) -> u64 {
        self.next_logger_id.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn name_allowed(&self, name: &str) -> bool {
        self.name_filter
            .read()
            .as_ref()
            .is_none_or(|filter| filter.matches(name))
    }

    /// Latch the start instant and count one allowed message.
    ///
    /// Returns the post-increment counter and the elapsed milliseconds.
    pub(crate) fn stamp(&self, now: Instant) -> (u64, u64) {
        let start = *self.started_at.lock().get_or_insert(now);
        let counter = self.message_count.fetch_add(1, Ordering::Relaxed) + 1;
        (counter, elapsed_ms(start, now))
    }

    /// Hand the record to every printer in registration order, stopping at
    /// the first failure.
    ///
    /// The set is snapshotted first, so printers registered meanwhile see
    /// only later messages.
    pub(crate) fn dispatch(&self, record: &Record) -> Result<()> {
        let printers = self.printers.lock().clone();
        for entry in &printers {
            let guard = entry.lock();
            // Busy on this thread: the record comes from this printer's own print
            let Ok(mut printer) = guard.try_borrow_mut() else {
                continue;
            };
            printer.print(record)?;
        }
        Ok(())
    }
}

/// Initial threshold of the global registry: the `BROLOG` directive when it
/// names a level, otherwise the default
fn startup_threshold() -> Severity {
    directive::from_env().unwrap_or_default()
}

pub(crate) fn elapsed_ms(start: Instant, now: Instant) -> u64 {
    u64::try_from(now.saturating_duration_since(start).as_millis()).unwrap_or(u64::MAX)
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("threshold", &self.threshold())
            .field("message_count", &self.message_count())
            .field("name_filter", &self.name_filter())
            .field("printers", &self.printer_count())
            .finish()
    }
}
