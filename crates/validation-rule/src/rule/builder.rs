//! RuleBuilder — factory for constructing Rule instances.

use serde_json::Value;

use super::classes::*;
use super::Rule;

/// Factory for constructing `Rule` values.
///
/// Lowercase methods are shorthands producing an unconstrained rule of each
/// kind; capitalised methods take the parts a composite rule is built from.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBuilder;

#[allow(non_snake_case)]
impl RuleBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand getters

    pub fn bool(&self) -> Rule {
        Rule::Bool(BoolRule::new())
    }

    pub fn num(&self) -> Rule {
        Rule::Num(NumRule::new())
    }

    pub fn str(&self) -> Rule {
        Rule::Str(StrRule::new())
    }

    pub fn timestamp(&self) -> Rule {
        Rule::Timestamp(TimestampRule::new())
    }

    /// Array with unconstrained elements.
    pub fn arr(&self) -> Rule {
        Rule::Arr(ArrRule::new(None))
    }

    /// Object accepting any shape.
    pub fn obj(&self) -> Rule {
        self.Object(vec![])
    }

    pub fn nil(&self) -> Rule {
        self.Const(Value::Null)
    }

    // ------------------------------------------------------------------
    // Factory methods

    pub fn Array(&self, items: Rule) -> Rule {
        Rule::Arr(ArrRule::new(Some(items)))
    }

    pub fn Object(&self, keys: Vec<KeyRule>) -> Rule {
        Rule::Obj(ObjRule::new(keys))
    }

    pub fn Or(&self, types: Vec<Rule>) -> Rule {
        Rule::Or(OrRule::new(types))
    }

    pub fn Const(&self, value: Value) -> Rule {
        Rule::Con(ConRule::new(value))
    }

    // ------------------------------------------------------------------
    // Higher-level helpers

    /// `rule | null`.
    pub fn maybe(&self, rule: Rule) -> Rule {
        self.Or(vec![rule, self.nil()])
    }

    /// Object whose keys are all optional, in the given order.
    pub fn object<I, K>(&self, record: I) -> Rule
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<String>,
    {
        let keys = record
            .into_iter()
            .map(|(k, v)| KeyRule::new_opt(k, v))
            .collect();
        self.Object(keys)
    }
}
