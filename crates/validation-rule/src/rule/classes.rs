//! Rule implementations.
//!
//! Each struct is one rule kind; modifiers consume and return `self` so rules
//! compose as builder chains: `StrRule::new().min(1).max(99)`.

use serde_json::{json, Map, Value};

use super::pattern::{Pattern, PatternError};
use super::Rule;

// -------------------------------------------------------------------------
// BoolRule

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolRule;

impl BoolRule {
    pub fn new() -> Self {
        Self
    }
    pub fn describe(&self) -> Value {
        json!({ "kind": self.kind() })
    }
    pub fn kind(&self) -> &'static str {
        "bool"
    }
}

// -------------------------------------------------------------------------
// NumRule

/// Finite number with optional inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumRule {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }
    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }
    pub fn describe(&self) -> Value {
        let mut out = Map::new();
        out.insert("kind".into(), self.kind().into());
        if let Some(min) = self.min {
            out.insert("min".into(), json!(min));
        }
        if let Some(max) = self.max {
            out.insert("max".into(), json!(max));
        }
        Value::Object(out)
    }
    pub fn kind(&self) -> &'static str {
        "num"
    }
}

// -------------------------------------------------------------------------
// StrRule

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrFormat {
    Email,
}

impl StrFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
        }
    }
}

/// String rule. Empty strings are rejected unless `allow_empty` is set;
/// `min`/`max` bound the length in characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrRule {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub pattern: Option<Pattern>,
    pub format: Option<StrFormat>,
    pub allow_empty: bool,
}

impl StrRule {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn min(mut self, v: u64) -> Self {
        self.min = Some(v);
        self
    }
    pub fn max(mut self, v: u64) -> Self {
        self.max = Some(v);
        self
    }
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
    /// Compiles `source` and attaches it as the pattern.
    pub fn regex(self, source: impl Into<String>) -> Result<Self, PatternError> {
        Ok(self.pattern(Pattern::new(source)?))
    }
    pub fn email(mut self) -> Self {
        self.format = Some(StrFormat::Email);
        self
    }
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
    pub fn describe(&self) -> Value {
        let mut out = Map::new();
        out.insert("kind".into(), self.kind().into());
        if let Some(min) = self.min {
            out.insert("min".into(), json!(min));
        }
        if let Some(max) = self.max {
            out.insert("max".into(), json!(max));
        }
        if let Some(pattern) = &self.pattern {
            out.insert("pattern".into(), pattern.as_str().into());
        }
        if let Some(format) = self.format {
            out.insert("format".into(), format.as_str().into());
        }
        if self.allow_empty {
            out.insert("allowEmpty".into(), true.into());
        }
        Value::Object(out)
    }
    pub fn kind(&self) -> &'static str {
        "str"
    }
}

// -------------------------------------------------------------------------
// TimestampRule

/// Date expressed as a numeric timestamp. With `raw` set, a validated value
/// is passed through as the original number rather than converted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimestampRule {
    pub raw: bool,
}

impl TimestampRule {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }
    pub fn describe(&self) -> Value {
        json!({ "kind": self.kind(), "raw": self.raw })
    }
    pub fn kind(&self) -> &'static str {
        "timestamp"
    }
}

// -------------------------------------------------------------------------
// ArrRule

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrRule {
    pub items: Option<Box<Rule>>,
}

impl ArrRule {
    pub fn new(items: Option<Rule>) -> Self {
        Self {
            items: items.map(Box::new),
        }
    }
    pub fn items(&self) -> Option<&Rule> {
        self.items.as_deref()
    }
    pub fn describe(&self) -> Value {
        let mut out = Map::new();
        out.insert("kind".into(), self.kind().into());
        if let Some(items) = &self.items {
            out.insert("type".into(), items.describe());
        }
        Value::Object(out)
    }
    pub fn kind(&self) -> &'static str {
        "arr"
    }
}

// -------------------------------------------------------------------------
// KeyRule

#[derive(Debug, Clone, PartialEq)]
pub struct KeyRule {
    pub key: String,
    pub val: Box<Rule>,
    pub optional: bool,
}

impl KeyRule {
    pub fn new(key: impl Into<String>, val: Rule) -> Self {
        Self {
            key: key.into(),
            val: Box::new(val),
            optional: false,
        }
    }
    pub fn new_opt(key: impl Into<String>, val: Rule) -> Self {
        Self {
            key: key.into(),
            val: Box::new(val),
            optional: true,
        }
    }
    pub fn describe(&self) -> Value {
        let mut out = Map::new();
        out.insert("key".into(), self.key.clone().into());
        out.insert("value".into(), self.val.describe());
        if self.optional {
            out.insert("optional".into(), true.into());
        }
        Value::Object(out)
    }
}

// -------------------------------------------------------------------------
// ObjRule

/// Object rule. With no declared keys any object is accepted; once keys are
/// declared, keys outside that set are rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjRule {
    pub keys: Vec<KeyRule>,
}

impl ObjRule {
    pub fn new(keys: Vec<KeyRule>) -> Self {
        Self { keys }
    }
    pub fn prop(mut self, key: impl Into<String>, val: Rule) -> Self {
        self.keys.push(KeyRule::new(key, val));
        self
    }
    pub fn opt(mut self, key: impl Into<String>, val: Rule) -> Self {
        self.keys.push(KeyRule::new_opt(key, val));
        self
    }
    pub fn get_field(&self, key: &str) -> Option<&KeyRule> {
        self.keys.iter().find(|k| k.key == key)
    }
    pub fn describe(&self) -> Value {
        json!({
            "kind": self.kind(),
            "keys": self.keys.iter().map(KeyRule::describe).collect::<Vec<_>>(),
        })
    }
    pub fn kind(&self) -> &'static str {
        "obj"
    }
}

// -------------------------------------------------------------------------
// OrRule

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrRule {
    pub types: Vec<Rule>,
}

impl OrRule {
    pub fn new(types: Vec<Rule>) -> Self {
        Self { types }
    }
    pub fn describe(&self) -> Value {
        json!({
            "kind": self.kind(),
            "types": self.types.iter().map(Rule::describe).collect::<Vec<_>>(),
        })
    }
    pub fn kind(&self) -> &'static str {
        "or"
    }
}

// -------------------------------------------------------------------------
// ConRule

#[derive(Debug, Clone, PartialEq)]
pub struct ConRule {
    pub value: Value,
}

impl ConRule {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
    pub fn literal(&self) -> &Value {
        &self.value
    }
    pub fn describe(&self) -> Value {
        json!({ "kind": self.kind(), "value": self.value })
    }
    pub fn kind(&self) -> &'static str {
        "con"
    }
}
