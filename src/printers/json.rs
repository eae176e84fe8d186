//! JSON lines printer

use crate::core::{Printer, Record, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Stdout, Write};
use std::path::Path;

/// Writes each record as a single-line JSON object (JSONL format),
/// prefixed with a wall-clock `timestamp`.
pub struct JsonPrinter<W: Write + Send> {
    writer: W,
    pretty: bool,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    record: &'a Record,
}

impl JsonPrinter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl JsonPrinter<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Printer for JsonPrinter<W> {
    fn print(&mut self, record: &Record) -> Result<()> {
        let line = JsonLine {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &line)?;
        } else {
            serde_json::to_writer(&mut self.writer, &line)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Severity, Value};

    #[test]
    fn test_writes_one_line_per_record() {
        let mut printer = JsonPrinter::new(Vec::new());
        let record = Record {
            global_counter: 1,
            global_elapsed_ms: 0,
            logger_name: "svc".to_string(),
            local_counter: 1,
            local_elapsed_ms: 0,
            level: Severity::Error,
            parts: vec![Value::from("boom"), Value::from(500)],
            meta: Some(Value::from(serde_json::json!({"request": "abc"}))),
        };
        printer.print(&record).unwrap();
        printer.print(&record).unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let json: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(json["level"], "ERR");
        assert_eq!(json["logger_name"], "svc");
        assert_eq!(json["parts"], serde_json::json!(["boom", 500]));
        assert_eq!(json["meta"]["request"], "abc");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
