//! Rule types.
//!
//! - `Rule` enum: the sum type of all rule kinds
//! - Individual structs: `StrRule`, `NumRule`, etc.
//! - `RuleBuilder`: factory for constructing `Rule` values

pub mod builder;
pub mod classes;
pub mod pattern;

pub use builder::RuleBuilder;
pub use classes::*;
pub use pattern::{is_email, Pattern, PatternError};

use serde_json::Value;

/// A composable validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Bool(BoolRule),
    Num(NumRule),
    Str(StrRule),
    Timestamp(TimestampRule),
    Arr(ArrRule),
    Obj(ObjRule),
    Or(OrRule),
    Con(ConRule),
}

impl Rule {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(r) => r.kind(),
            Self::Num(r) => r.kind(),
            Self::Str(r) => r.kind(),
            Self::Timestamp(r) => r.kind(),
            Self::Arr(r) => r.kind(),
            Self::Obj(r) => r.kind(),
            Self::Or(r) => r.kind(),
            Self::Con(r) => r.kind(),
        }
    }

    /// JSON description of the rule and everything nested in it.
    pub fn describe(&self) -> Value {
        match self {
            Self::Bool(r) => r.describe(),
            Self::Num(r) => r.describe(),
            Self::Str(r) => r.describe(),
            Self::Timestamp(r) => r.describe(),
            Self::Arr(r) => r.describe(),
            Self::Obj(r) => r.describe(),
            Self::Or(r) => r.describe(),
            Self::Con(r) => r.describe(),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl From<BoolRule> for Rule {
    fn from(r: BoolRule) -> Self {
        Self::Bool(r)
    }
}

impl From<NumRule> for Rule {
    fn from(r: NumRule) -> Self {
        Self::Num(r)
    }
}

impl From<StrRule> for Rule {
    fn from(r: StrRule) -> Self {
        Self::Str(r)
    }
}

impl From<TimestampRule> for Rule {
    fn from(r: TimestampRule) -> Self {
        Self::Timestamp(r)
    }
}

impl From<ArrRule> for Rule {
    fn from(r: ArrRule) -> Self {
        Self::Arr(r)
    }
}

impl From<ObjRule> for Rule {
    fn from(r: ObjRule) -> Self {
        Self::Obj(r)
    }
}

impl From<OrRule> for Rule {
    fn from(r: OrRule) -> Self {
        Self::Or(r)
    }
}

impl From<ConRule> for Rule {
    fn from(r: ConRule) -> Self {
        Self::Con(r)
    }
}
