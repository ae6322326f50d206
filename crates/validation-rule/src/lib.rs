//! `validation-rule` — composable validation rules for JSON values.
//!
//! Rules are plain values: build them with [`RuleBuilder`] or the per-kind
//! structs, nest them inside array and object rules, compare them
//! structurally, and check values with [`validate`].
//!
//! ```
//! use serde_json::json;
//! use validation_rule::{validate, Rule, RuleBuilder, StrRule, ValidatorOptions};
//!
//! let t = RuleBuilder::new();
//! let rule = t.object([
//!     ("id", t.str()),
//!     ("name", Rule::from(StrRule::new().max(99))),
//! ]);
//!
//! let opts = ValidatorOptions::default();
//! assert!(validate(&json!({"id": "a1", "name": "Ann"}), &rule, &opts, &[]).is_ok());
//! assert!(validate(&json!({"id": 1}), &rule, &opts, &[]).is_err());
//! ```

pub mod constants;
pub mod rule;
pub mod validator;

pub use constants::ValidationError;
pub use rule::{
    ArrRule, BoolRule, ConRule, KeyRule, NumRule, ObjRule, OrRule, Pattern, PatternError, Rule,
    RuleBuilder, StrFormat, StrRule, TimestampRule,
};
pub use validator::{validate, ErrorMode, ValidationResult, ValidatorOptions};
