//! Registry construction: fluent builder and serde configuration

use super::{
    error::{LoggerError, Result},
    name_filter::NameFilter,
    printer::Printer,
    registry::Registry,
    severity::Severity,
};
use crate::printers;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Builder for constructing a [`Registry`] with a fluent API
///
/// A builder starts with no printers; add them explicitly.
///
/// # Example
/// ```
/// use brolog::prelude::*;
///
/// let registry = Registry::builder()
///     .threshold(Severity::Warn)
///     .name_filter("api|db")
///     .printer(ConsolePrinter::with_colors(false))
///     .build()
///     .unwrap();
/// assert_eq!(registry.printer_count(), 1);
/// ```
pub struct RegistryBuilder {
    threshold: Severity,
    name_filter: Option<NameFilter>,
    printers: Vec<Box<dyn Printer>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            threshold: Severity::default(),
            name_filter: None,
            printers: Vec::new(),
        }
    }

    /// Build from a parsed configuration.
    ///
    /// Every field is validated here, so a bad level, pattern or printer kind
    /// is reported before any registry exists.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut builder = Self::new();

        if let Some(ref level) = config.threshold {
            builder.threshold = level.parse()?;
        }

        if let Some(ref pattern) = config.name_filter {
            let filter = NameFilter::from(pattern.as_str());
            filter.compile()?;
            builder.name_filter = Some(filter);
        }

        for name in &config.printers {
            builder.printers.push(printers::by_name(name)?);
        }

        Ok(builder)
    }

    /// Set the initial global threshold
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Severity) -> Self {
        self.threshold = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name_filter(mut self, filter: impl Into<NameFilter>) -> Self {
        self.name_filter = Some(filter.into());
        self
    }

    /// Append a printer
    #[must_use = "builder methods return a new value"]
    pub fn printer<P: Printer + 'static>(mut self, printer: P) -> Self {
        self.printers.push(Box::new(printer));
        self
    }

    /// Build the Registry
    ///
    /// Fails with `InvalidFilterArgument` if the name filter does not compile.
    pub fn build(self) -> Result<Registry> {
        let name_filter = self
            .name_filter
            .as_ref()
            .map(NameFilter::compile)
            .transpose()?;
        Ok(Registry::from_parts(
            self.threshold,
            name_filter,
            self.printers,
        ))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable registry configuration
///
/// ```json
/// { "threshold": "wrn", "name_filter": "api|db", "printers": ["console", "json"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Level name, matched case-insensitively
    pub threshold: Option<String>,
    pub name_filter: Option<String>,
    /// Printer kind names, in registration order
    pub printers: Vec<String>,
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("RegistryConfig", e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_builder(&self) -> Result<RegistryBuilder> {
        RegistryBuilder::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let registry = RegistryBuilder::default().build().unwrap();
        assert_eq!(registry.threshold(), Severity::Info);
        assert_eq!(registry.printer_count(), 0);
        assert!(registry.name_filter().is_none());
    }

    #[test]
    fn test_builder_invalid_filter() {
        let err = Registry::builder().name_filter("a(").build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFilterArgument { .. }));
    }

    #[test]
    fn test_config_from_json() {
        let config = RegistryConfig::from_json(
            r#"{"threshold": "wrn", "name_filter": "api|db", "printers": ["console-plain", "json"]}"#,
        )
        .unwrap();
        let registry = config.to_builder().unwrap().build().unwrap();
        assert_eq!(registry.threshold(), Severity::Warn);
        assert_eq!(registry.name_filter().as_deref(), Some("api|db"));
        assert_eq!(registry.printer_count(), 2);
    }

    #[test]
    fn test_config_empty_object() {
        let config = RegistryConfig::from_json("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let bad_level = RegistryConfig {
            threshold: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            RegistryBuilder::from_config(&bad_level),
            Err(LoggerError::InvalidLevel { .. })
        ));

        let bad_filter = RegistryConfig {
            name_filter: Some("[".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            RegistryBuilder::from_config(&bad_filter),
            Err(LoggerError::InvalidFilterArgument { .. })
        ));

        let bad_printer = RegistryConfig {
            printers: vec!["syslog".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            RegistryBuilder::from_config(&bad_printer),
            Err(LoggerError::InvalidPrinter { .. })
        ));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let err = RegistryConfig::from_json(r#"{"level": "dbg"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("brolog.json");
        std::fs::write(&path, r#"{"threshold": "OFF"}"#).unwrap();

        let config = RegistryConfig::from_file(&path).unwrap();
        assert_eq!(config.threshold.as_deref(), Some("OFF"));
    }
}
