//! Variadic emission macros.
//!
//! Each argument after the logger becomes one payload part through
//! `Value::from`, so mixed types can be passed without building a vector by
//! hand. The macros evaluate to the emission's `Result<Option<String>>`.
//!
//! # Examples
//!
//! ```
//! use brolog::prelude::*;
//! use brolog::info;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::builder().build().unwrap());
//! let logger = registry.logger("http");
//!
//! let port = 8080;
//! let text = info!(logger, "listening on", port).unwrap();
//! assert_eq!(text.as_deref(), Some("listening on 8080"));
//! ```

/// Emit at an explicit level.
///
/// # Examples
///
/// ```
/// # use brolog::prelude::*;
/// # use std::sync::Arc;
/// # let registry = Arc::new(Registry::builder().build().unwrap());
/// # let logger = registry.logger("svc");
/// use brolog::log;
/// log!(logger, Severity::Warn, "retry", 3, "of", 5).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $part:expr)* $(,)?) => {{
        let parts: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Value::from($part)),*];
        $logger.emit($level, parts)
    }};
}

/// Emit a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Debug $(, $part)*)
    };
}

/// Emit an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Info $(, $part)*)
    };
}

/// Emit a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Warn $(, $part)*)
    };
}

/// Emit an error-level message.
///
/// # Examples
///
/// ```
/// # use brolog::prelude::*;
/// # use std::sync::Arc;
/// # let registry = Arc::new(Registry::builder().build().unwrap());
/// # let logger = registry.logger("db");
/// use brolog::error;
/// error!(logger.attach_meta("conn-7"), "query failed:", "timeout").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Error $(, $part)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Registry, Severity, Value};
    use crate::printers::MemoryPrinter;
    use std::sync::Arc;

    fn setup() -> (Arc<Registry>, MemoryPrinter) {
        let printer = MemoryPrinter::new();
        let registry = Registry::builder()
            .threshold(Severity::Debug)
            .printer(printer.clone())
            .build()
            .unwrap();
        (Arc::new(registry), printer)
    }

    #[test]
    fn test_log_macro() {
        let (registry, printer) = setup();
        let logger = registry.logger("svc");
        let text = log!(logger, Severity::Warn, "retry", 1, "of", 3u64).unwrap();
        assert_eq!(text.as_deref(), Some("retry 1 of 3"));
        assert_eq!(printer.last().unwrap().level, Severity::Warn);
    }

    #[test]
    fn test_level_macros() {
        let (registry, printer) = setup();
        let logger = registry.logger("svc");
        debug!(logger, "d").unwrap();
        info!(logger, "i").unwrap();
        warn!(logger, "w").unwrap();
        error!(logger, "e").unwrap();

        let names: Vec<_> = printer.records().iter().map(|r| r.level_name()).collect();
        assert_eq!(names, vec!["DBG", "INF", "WRN", "ERR"]);
    }

    #[test]
    fn test_macro_without_parts() {
        let (registry, printer) = setup();
        let logger = registry.logger("svc");
        assert_eq!(info!(logger).unwrap().as_deref(), Some(""));
        assert!(printer.last().unwrap().parts.is_empty());
    }

    #[test]
    fn test_macro_keeps_part_types() {
        let (registry, printer) = setup();
        let logger = registry.logger("svc");
        let user = String::from("ada");
        info!(logger, "user", &user, "age", 36, "admin", true).unwrap();

        let parts = printer.last().unwrap().parts;
        assert_eq!(parts[1], Value::from("ada"));
        assert_eq!(parts[3], Value::Int(36));
        assert_eq!(parts[5], Value::Bool(true));
    }
}
