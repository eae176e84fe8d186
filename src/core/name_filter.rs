//! Logger name filter
//!
//! A filter is given either as a ready [`Regex`] or as a pattern string.
//! Both forms are resolved once into a single regex anchored at both ends,
//! so a logger name passes only when the whole name matches.
//!
//! The pattern is parsed and re-printed before anchoring, so inline flags
//! such as `(?i)` or `(?x)` with `#` comments keep their meaning. Options set
//! through `RegexBuilder` are not part of a regex's pattern text and do not
//! carry over; write them as inline flags instead.

use super::error::{LoggerError, Result};
use regex::Regex;
use std::fmt;

/// Argument accepted by `Registry::set_name_filter`
#[derive(Debug, Clone)]
pub enum NameFilter {
    Pattern(Regex),
    Text(String),
}

impl From<Regex> for NameFilter {
    fn from(re: Regex) -> Self {
        NameFilter::Pattern(re)
    }
}

impl From<&str> for NameFilter {
    fn from(s: &str) -> Self {
        NameFilter::Text(s.to_string())
    }
}

impl From<String> for NameFilter {
    fn from(s: String) -> Self {
        NameFilter::Text(s)
    }
}

impl NameFilter {
    fn source(&self) -> &str {
        match self {
            NameFilter::Pattern(re) => re.as_str(),
            NameFilter::Text(s) => s,
        }
    }

    /// Compile into a full-match matcher
    pub fn compile(&self) -> Result<CompiledFilter> {
        let source = self.source();
        let hir = regex_syntax::parse(source).map_err(|e| {
            LoggerError::invalid_filter(source, regex::Error::Syntax(e.to_string()))
        })?;
        let anchored = Regex::new(&format!("^(?:{})$", hir))
            .map_err(|e| LoggerError::invalid_filter(source, e))?;
        Ok(CompiledFilter {
            source: source.to_string(),
            anchored,
        })
    }
}

/// A name filter resolved into its anchored form
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    source: String,
    anchored: Regex,
}

impl CompiledFilter {
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.anchored.is_match(name)
    }

    /// The pattern as given by the caller
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for CompiledFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_filter_is_full_match() {
        let filter = NameFilter::from("svc").compile().unwrap();
        assert!(filter.matches("svc"));
        assert!(!filter.matches("svc2"));
        assert!(!filter.matches("myservice"));
    }

    #[test]
    fn test_regex_filter_is_anchored() {
        let filter = NameFilter::from(Regex::new("db|cache").unwrap())
            .compile()
            .unwrap();
        assert!(filter.matches("db"));
        assert!(filter.matches("cache"));
        assert!(!filter.matches("dbcache"));
        assert!(!filter.matches("redis-cache"));
    }

    #[test]
    fn test_already_anchored_pattern() {
        let filter = NameFilter::from("^svc$").compile().unwrap();
        assert!(filter.matches("svc"));
        assert!(!filter.matches("svc2"));
        assert_eq!(filter.source(), "^svc$");
    }

    #[test]
    fn test_verbose_pattern_with_comment() {
        let re = Regex::new("(?x) svc  # service logger").unwrap();
        let filter = NameFilter::from(re).compile().unwrap();
        assert!(filter.matches("svc"));
        assert!(!filter.matches("svc2"));
        assert_eq!(filter.source(), "(?x) svc  # service logger");
    }

    #[test]
    fn test_inline_flags_are_kept() {
        let filter = NameFilter::from("(?i)svc|db").compile().unwrap();
        assert!(filter.matches("SVC"));
        assert!(filter.matches("Db"));
        assert!(!filter.matches("SVC2"));
    }

    #[test]
    fn test_builder_options_do_not_carry_over() {
        let re = regex::RegexBuilder::new("svc")
            .case_insensitive(true)
            .build()
            .unwrap();
        let filter = NameFilter::from(re).compile().unwrap();
        assert!(filter.matches("svc"));
        assert!(!filter.matches("SVC"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = NameFilter::from("svc(").compile().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFilterArgument { .. }));
    }
}
