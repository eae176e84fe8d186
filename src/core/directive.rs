//! Startup directive for the initial global threshold
//!
//! The directive is a `brolog=<LEVEL>` pair inside a query-string-like
//! source (`?verbose=1&brolog=wrn`), or the bare level in the `BROLOG`
//! environment variable. Level names are matched case-insensitively.
//! Missing directives are ignored silently, unrecognized levels with a
//! warning on stderr.

use super::severity::Severity;

pub const DIRECTIVE_KEY: &str = "brolog";
pub const DIRECTIVE_ENV: &str = "BROLOG";

/// Parse a directive value into a level
pub fn parse_level(value: &str) -> Option<Severity> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(level) => Some(level),
        Err(e) => {
            eprintln!("[LOGGER WARNING] Ignoring {} directive: {}", DIRECTIVE_KEY, e);
            None
        }
    }
}

/// Find the first `brolog=<LEVEL>` pair in a query string
pub fn from_query(query: &str) -> Option<Severity> {
    let query = query.split('#').next().unwrap_or_default();
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == DIRECTIVE_KEY)
        .and_then(|(_, value)| parse_level(value))
}

/// Read the level from the `BROLOG` environment variable
pub fn from_env() -> Option<Severity> {
    from_env_value(std::env::var(DIRECTIVE_ENV).ok().as_deref())
}

/// Resolve the value of the `BROLOG` variable, if it is set
pub fn from_env_value(value: Option<&str>) -> Option<Severity> {
    value.and_then(parse_level)
}
