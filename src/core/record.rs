//! Canonical record delivered to printers

use super::severity::Severity;
use super::value::{self, Value};
use serde::Serialize;

/// The fixed-shape value every printer receives for an allowed emission.
///
/// Field order mirrors the order printers conventionally render them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub global_counter: u64,
    pub global_elapsed_ms: u64,
    pub logger_name: String,
    pub local_counter: u64,
    pub local_elapsed_ms: u64,
    pub level: Severity,
    pub parts: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Record {
    #[inline]
    pub fn level_name(&self) -> &'static str {
        self.level.as_str()
    }

    /// Space-joined text of the payload parts
    pub fn message(&self) -> String {
        value::join(&self.parts)
    }

    /// Bracketed stamp tokens for fields 1 to 6
    pub fn prefix_tokens(&self) -> [String; 4] {
        [
            format!("[{} {}]", self.global_counter, self.global_elapsed_ms),
            format!("[{}]", self.logger_name),
            format!("[{} {}]", self.local_counter, self.local_elapsed_ms),
            format!("[{}]", self.level_name()),
        ]
    }

    /// Stamp tokens followed by each payload part as its own token
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.prefix_tokens().into();
        tokens.extend(self.parts.iter().map(ToString::to_string));
        tokens
    }
}
