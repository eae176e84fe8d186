//! Printer implementations

pub mod console;
pub mod json;
pub mod memory;

pub use console::ConsolePrinter;
pub use json::JsonPrinter;
pub use memory::MemoryPrinter;

pub use crate::core::Printer;
use crate::core::{LoggerError, Result};

/// Kind names accepted by [`by_name`]
pub const PRINTER_KINDS: [&str; 4] = ["console", "console-plain", "stdout", "json"];

/// Resolve a built-in printer from its kind name
pub fn by_name(name: &str) -> Result<Box<dyn Printer>> {
    match name {
        "console" => Ok(Box::new(ConsolePrinter::new())),
        "console-plain" => Ok(Box::new(ConsolePrinter::with_colors(false))),
        "stdout" => Ok(Box::new(ConsolePrinter::with_colors(false).single_channel())),
        "json" => Ok(Box::new(JsonPrinter::stdout())),
        _ => Err(LoggerError::invalid_printer(name)),
    }
}
