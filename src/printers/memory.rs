//! In-memory printer

use crate::core::{Printer, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every record it receives.
///
/// Clones share the same buffer, so register one clone and read back
/// through another.
///
/// ```
/// use brolog::prelude::*;
/// use std::sync::Arc;
///
/// let printer = MemoryPrinter::new();
/// let registry = Arc::new(Registry::builder().printer(printer.clone()).build().unwrap());
/// registry.logger("svc").warn(["low disk"]).unwrap();
///
/// assert_eq!(printer.len(), 1);
/// assert_eq!(printer.last().unwrap().message(), "low disk");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPrinter {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemoryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn last(&self) -> Option<Record> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Printer for MemoryPrinter {
    fn print(&mut self, record: &Record) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
