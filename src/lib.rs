//! # brolog
//!
//! A small structured-logging facade. Components create named loggers, emit
//! leveled messages and have them fanned out to any number of printers.
//!
//! ## Features
//!
//! - **Two-tier filtering**: a global threshold on the [`Registry`] and a
//!   per-logger threshold, plus an optional full-match name filter
//! - **Stamped records**: every allowed message carries global and
//!   per-logger counters and elapsed times
//! - **One-shot metadata**: attach a value to exactly the next message
//! - **Pluggable printers**: console, JSON lines, in-memory or any closure
//!
//! ```
//! use brolog::prelude::*;
//! use std::sync::Arc;
//!
//! let printer = MemoryPrinter::new();
//! let registry = Arc::new(
//!     Registry::builder()
//!         .threshold(Severity::Debug)
//!         .printer(printer.clone())
//!         .build()
//!         .unwrap(),
//! );
//!
//! let svc = registry.logger("svc");
//! svc.attach_meta("req-1").info(["hello"]).unwrap();
//!
//! let record = printer.last().unwrap();
//! assert_eq!(record.global_counter, 1);
//! assert_eq!(record.meta, Some(Value::from("req-1")));
//! ```

pub mod core;
pub mod macros;
pub mod printers;

pub mod prelude {
    pub use crate::core::{
        Logger, LoggerError, NameFilter, Printer, Record, Registry, RegistryBuilder,
        RegistryConfig, Result, Severity, Value,
    };
    pub use crate::printers::{ConsolePrinter, JsonPrinter, MemoryPrinter};
}

pub use self::core::{
    Logger, LoggerError, NameFilter, Printer, Record, Registry, RegistryBuilder, RegistryConfig,
    Result, Severity, Value,
};
pub use printers::{ConsolePrinter, JsonPrinter, MemoryPrinter};
