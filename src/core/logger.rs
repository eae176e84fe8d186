//! Named loggers and the dispatch pipeline

use super::{
    error::{LoggerError, Result},
    record::Record,
    registry::{elapsed_ms, Registry},
    severity::Severity,
    value::{self, Value},
};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A named emitter bound to a [`Registry`].
///
/// Every logger has its own threshold, message counter and start instant,
/// plus a one-shot metadata slot filled by [`Logger::attach_meta`].
///
/// # Example
///
/// ```
/// use brolog::prelude::*;
/// use std::sync::Arc;
///
/// let printer = MemoryPrinter::new();
/// let registry = Arc::new(
///     Registry::builder()
///         .threshold(Severity::Debug)
///         .printer(printer.clone())
///         .build()
///         .unwrap(),
/// );
///
/// let logger = registry.logger("svc");
/// let text = logger.info(["listening on", "8080"]).unwrap();
/// assert_eq!(text.as_deref(), Some("listening on 8080"));
/// assert_eq!(printer.last().unwrap().level_name(), "INF");
/// ```
#[derive(Debug)]
pub struct Logger {
    registry: Arc<Registry>,
    id: u64,
    name: String,
    has_given_name: bool,
    threshold: RwLock<Severity>,
    message_count: AtomicU64,
    started_at: Mutex<Option<Instant>>,
    pending_meta: Mutex<Option<Value>>,
}

impl Logger {
    /// Create a named logger bound to the process-wide registry
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_registry(Arc::clone(Registry::global()), Some(name.into()))
    }

    /// Create a logger on the process-wide registry, named after its id
    pub fn anonymous() -> Self {
        Self::with_registry(Arc::clone(Registry::global()), None)
    }

    pub fn with_registry(registry: Arc<Registry>, name: Option<String>) -> Self {
        let id = registry.next_logger_id();
        let has_given_name = name.as_deref().is_some_and(|n| !n.is_empty());
        let name = match name {
            Some(n) if has_given_name => n,
            _ => format!("Logger {}", id),
        };

        Self {
            registry,
            id,
            name,
            has_given_name,
            threshold: RwLock::new(Severity::Debug),
            message_count: AtomicU64::new(0),
            started_at: Mutex::new(None),
            pending_meta: Mutex::new(None),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name was supplied at construction
    pub fn has_given_name(&self) -> bool {
        self.has_given_name
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Set this logger's own gate. The registry's gate still applies.
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

    /// Alias for [`Logger::set_info`]
    pub fn set_inf(&self) {
        self.set_info();
    }

    /// Alias for [`Logger::set_info`]
    pub fn set_log(&self) {
        self.set_info();
    }

    pub fn set_error(&self) {
        self.set_threshold(Severity::Error);
    }

    /// Alias for [`Logger::set_error`]
    pub fn set_err(&self) {
        self.set_error();
    }

    pub fn off(&self) {
        self.set_threshold(Severity::Off);
    }

    /// Number of messages this logger has emitted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::Relaxed)
    }

    pub fn started_at(&self) -> Option<Instant> {
        *self.started_at.lock()
    }

    pub fn pending_meta(&self) -> Option<Value> {
        self.pending_meta.lock().clone()
    }

    /// Attach a value to the next allowed emission.
    ///
    /// Suppressed emissions leave it in place. The first emission that passes
    /// the gates takes it, even when a printer then fails, so it is never
    /// delivered with two messages.
    pub fn attach_meta(&self, meta: impl Into<Value>) -> &Self {
        *self.pending_meta.lock() = Some(meta.into());
        self
    }

    /// Allow predicate: global threshold, own threshold, then name filter
    #[inline]
    fn allows(&self, level: Severity) -> bool {
        level >= self.registry.threshold()
            && level >= self.threshold()
            && self.registry.name_allowed(&self.name)
    }

    /// Emit `parts` at `level`.
    ///
    /// Returns `Ok(None)` when a gate suppresses the message, in which case no
    /// state is touched. Otherwise the message is stamped, handed to every
    /// printer in order and its space-joined text is returned. A printer
    /// error stops dispatch and is returned as is; the message stays counted.
    pub fn emit<I, V>(&self, level: Severity, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if !level.is_emittable() {
            return Err(LoggerError::invalid_level(level.as_str()));
        }
        if !self.allows(level) {
            return Ok(None);
        }

        let now = Instant::now();
        let (global_counter, global_elapsed_ms) = self.registry.stamp(now);
        let local_start = *self.started_at.lock().get_or_insert(now);
        let local_counter = self.message_count.fetch_add(1, Ordering::Relaxed) + 1;
        let meta = self.pending_meta.lock().take();

        let record = Record {
            global_counter,
            global_elapsed_ms,
            logger_name: self.name.clone(),
            local_counter,
            local_elapsed_ms: elapsed_ms(local_start, now),
            level,
            parts: parts.into_iter().map(Into::into).collect(),
            meta,
        };

        self.registry.dispatch(&record)?;

        Ok(Some(value::join(&record.parts)))
    }

    #[inline]
    pub fn debug<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Debug, parts)
    }

    #[inline]
    pub fn info<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Info, parts)
    }

    /// Alias for [`Logger::info`]
    #[inline]
    pub fn log<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Info, parts)
    }

    /// Alias for [`Logger::info`]
    #[inline]
    pub fn inf<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Info, parts)
    }

    #[inline]
    pub fn warn<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Warn, parts)
    }

    #[inline]
    pub fn error<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Error, parts)
    }

    /// Alias for [`Logger::error`]
    #[inline]
    pub fn err<I, V>(&self, parts: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.emit(Severity::Error, parts)
    }
}
