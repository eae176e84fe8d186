//! Printer trait for record sinks

use super::{error::Result, record::Record};

/// A sink for canonical records.
///
/// Printers are invoked synchronously, in registration order, for every
/// allowed emission. An `Err` stops dispatch and is returned to the caller
/// of the emission method.
pub trait Printer: Send {
    fn print(&mut self, record: &Record) -> Result<()>;

    fn name(&self) -> &str {
        "printer"
    }
}

impl<F> Printer for F
where
    F: FnMut(&Record) -> Result<()> + Send,
{
    fn print(&mut self, record: &Record) -> Result<()> {
        self(record)
    }

    fn name(&self) -> &str {
        "fn"
    }
}
