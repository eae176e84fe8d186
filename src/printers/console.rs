//! Console printer implementation

use crate::core::{Printer, Record, Result, Severity};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// The default printer.
///
/// Renders `[global ms] [name] [local ms] [LVL]` followed by the payload
/// parts, and the metadata when one is attached.
pub struct ConsolePrinter {
    use_colors: bool,
    single_channel: bool,
}

impl ConsolePrinter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            single_channel: false,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            single_channel: false,
        }
    }

    /// Send every level to stdout instead of routing warnings and errors
    /// to stderr
    #[must_use]
    pub fn single_channel(mut self) -> Self {
        self.single_channel = true;
        self
    }

    /// Whether the level token is colored. Always plain without the
    /// `console` feature.
    pub fn uses_colors(&self) -> bool {
        cfg!(feature = "console") && self.use_colors
    }

    pub fn format_line(&self, record: &Record) -> String {
        let [global, name, local, level] = record.prefix_tokens();
        let level = self.paint(record.level, level);

        let mut line = format!("{} {} {} {}", global, name, local, level);
        for part in &record.parts {
            line.push(' ');
            line.push_str(&part.to_string());
        }
        if let Some(ref meta) = record.meta {
            line.push_str(&format!(" {{{}}}", meta));
        }
        line
    }

    #[cfg(feature = "console")]
    fn paint(&self, level: Severity, token: String) -> String {
        if self.uses_colors() {
            token.as_str().color(level.color_code()).to_string()
        } else {
            token
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _level: Severity, token: String) -> String {
        token
    }
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for ConsolePrinter {
    fn print(&mut self, record: &Record) -> Result<()> {
        let line = self.format_line(record);

        // Warnings and errors go to stderr unless everything shares stdout
        match record.level {
            Severity::Warn | Severity::Error if !self.single_channel => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{}", line)?;
            }
            _ => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
