//! Core logger types and traits

pub mod config;
pub mod directive;
pub mod error;
pub mod logger;
pub mod name_filter;
pub mod printer;
pub mod record;
pub mod registry;
pub mod severity;
pub mod value;

pub use config::{RegistryBuilder, RegistryConfig};
pub use error::{LoggerError, Result};
pub use logger::Logger;
pub use name_filter::NameFilter;
pub use printer::Printer;
pub use record::Record;
pub use registry::Registry;
pub use severity::Severity;
pub use value::Value;
