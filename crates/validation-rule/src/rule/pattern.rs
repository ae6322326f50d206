//! Compiled regular-expression patterns attached to string rules.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// A pattern failed to compile.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid pattern /{source_text}/: {error}")]
pub struct PatternError {
    pub source_text: String,
    #[source]
    pub error: regex::Error,
}

/// A regex together with the source text it was compiled from.
///
/// Equality compares sources, so two rules built from the same pattern text
/// are structurally equal.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        let source = source.into();
        match Regex::new(&source) {
            Ok(regex) => Ok(Self { source, regex }),
            Err(error) => Err(PatternError {
                source_text: source,
                error,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$"
        ).unwrap()
    })
}

/// Email address check used by `StrRule::email`.
///
/// Requires a dotted domain, so `user@localhost` is rejected.
pub fn is_email(s: &str) -> bool {
    s.len() <= 254 && email_regex().is_match(s)
}
