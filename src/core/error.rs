//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown severity name or rank, or an emission at `OFF`
    #[error("Invalid level: '{value}'")]
    InvalidLevel { value: String },

    /// Name filter string that does not compile as a pattern
    #[error("Invalid name filter '{pattern}': {source}")]
    InvalidFilterArgument {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Printer kind that cannot be resolved
    #[error("Invalid printer: '{name}'")]
    InvalidPrinter { name: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Failure reported by a printer during dispatch
    #[error("Printer '{printer}' failed: {message}")]
    Printer { printer: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid name filter error
    pub fn invalid_filter(pattern: impl Into<String>, source: regex::Error) -> Self {
        LoggerError::InvalidFilterArgument {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an invalid printer error
    pub fn invalid_printer(name: impl Into<String>) -> Self {
        LoggerError::InvalidPrinter { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a printer failure
    pub fn printer(printer: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Printer {
            printer: printer.into(),
            message: message.into(),
        }
    }
}
