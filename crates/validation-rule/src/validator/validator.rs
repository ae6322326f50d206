//! Runtime validator — validates JSON values against rules by match dispatch.

use serde_json::Value;

use crate::constants::ValidationError;
use crate::rule::classes::*;
use crate::rule::{is_email, Rule};

use super::types::{ErrorMode, ValidationResult, ValidatorOptions};

/// Validate a JSON value against a rule. `path` prefixes reported error paths.
pub fn validate(
    value: &Value,
    rule: &Rule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    validate_inner(value, rule, opts, path)
}

fn make_error(code: ValidationError, path: &[Value], opts: &ValidatorOptions) -> ValidationResult {
    match opts.errors {
        ErrorMode::Boolean => ValidationResult::BoolError,
        ErrorMode::String => {
            let mut parts: Vec<Value> = vec![Value::String(code.name().to_string())];
            parts.extend_from_slice(path);
            ValidationResult::StringError(
                serde_json::to_string(&Value::Array(parts)).unwrap_or_default(),
            )
        }
        ErrorMode::Object => ValidationResult::ObjectError {
            code: code.name().to_string(),
            errno: code as u8,
            message: code.message().to_string(),
            path: path.to_vec(),
        },
    }
}

fn validate_inner(
    value: &Value,
    rule: &Rule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    match rule {
        Rule::Bool(_) => {
            if !value.is_boolean() {
                return make_error(ValidationError::Bool, path, opts);
            }
            ValidationResult::Ok
        }

        Rule::Num(r) => validate_num(value, r, opts, path),

        Rule::Str(r) => validate_str(value, r, opts, path),

        Rule::Timestamp(_) => match value.as_f64() {
            Some(n) if n.is_finite() => ValidationResult::Ok,
            _ => make_error(ValidationError::Timestamp, path, opts),
        },

        Rule::Arr(r) => validate_arr(value, r, opts, path),

        Rule::Obj(r) => validate_obj(value, r, opts, path),

        Rule::Or(r) => validate_or(value, r, opts, path),

        Rule::Con(r) => {
            if !json_equal(value, &r.value) {
                return make_error(ValidationError::Const, path, opts);
            }
            ValidationResult::Ok
        }
    }
}

fn validate_num(
    value: &Value,
    r: &NumRule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    let num = match value.as_f64() {
        Some(n) if n.is_finite() => n,
        _ => return make_error(ValidationError::Num, path, opts),
    };
    if let Some(min) = r.min {
        if num < min {
            return make_error(ValidationError::Min, path, opts);
        }
    }
    if let Some(max) = r.max {
        if num > max {
            return make_error(ValidationError::Max, path, opts);
        }
    }
    ValidationResult::Ok
}

fn validate_str(
    value: &Value,
    r: &StrRule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    let s = match value.as_str() {
        Some(s) => s,
        None => return make_error(ValidationError::Str, path, opts),
    };
    if s.is_empty() {
        if r.allow_empty {
            return ValidationResult::Ok;
        }
        return make_error(ValidationError::StrEmpty, path, opts);
    }
    let len = s.chars().count() as u64;
    if let Some(min) = r.min {
        if len < min {
            return make_error(ValidationError::StrLen, path, opts);
        }
    }
    if let Some(max) = r.max {
        if len > max {
            return make_error(ValidationError::StrLen, path, opts);
        }
    }
    if r.format == Some(StrFormat::Email) && !is_email(s) {
        return make_error(ValidationError::Email, path, opts);
    }
    if let Some(pattern) = &r.pattern {
        if !pattern.is_match(s) {
            return make_error(ValidationError::Pattern, path, opts);
        }
    }
    ValidationResult::Ok
}

fn validate_arr(
    value: &Value,
    r: &ArrRule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    let arr = match value.as_array() {
        Some(a) => a,
        None => return make_error(ValidationError::Arr, path, opts),
    };
    if let Some(items) = r.items() {
        for (i, item) in arr.iter().enumerate() {
            let mut p = path.to_vec();
            p.push(Value::Number(i.into()));
            let res = validate_inner(item, items, opts, &p);
            if res.is_err() {
                return res;
            }
        }
    }
    ValidationResult::Ok
}

fn validate_obj(
    value: &Value,
    r: &ObjRule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    let obj = match value.as_object() {
        Some(o) => o,
        None => return make_error(ValidationError::Obj, path, opts),
    };

    let check_extra = !r.keys.is_empty() && !opts.skip_object_extra_fields_check;
    if check_extra {
        for key in obj.keys() {
            if r.get_field(key).is_none() {
                let mut p = path.to_vec();
                p.push(Value::String(key.clone()));
                return make_error(ValidationError::Keys, &p, opts);
            }
        }
    }

    for field in &r.keys {
        let mut p = path.to_vec();
        p.push(Value::String(field.key.clone()));
        let v = match obj.get(&field.key) {
            Some(v) => v,
            None if field.optional => continue,
            None => return make_error(ValidationError::Key, &p, opts),
        };
        let res = validate_inner(v, &field.val, opts, &p);
        if res.is_err() {
            return res;
        }
    }
    ValidationResult::Ok
}

fn validate_or(
    value: &Value,
    r: &OrRule,
    opts: &ValidatorOptions,
    path: &[Value],
) -> ValidationResult {
    // First match wins.
    for rule in &r.types {
        let res = validate_inner(value, rule, opts, path);
        if res.is_ok() {
            return res;
        }
    }
    make_error(ValidationError::Or, path, opts)
}

/// Deep equality for JSON values, comparing numbers by value (`1 == 1.0`).
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .zip(b.as_f64())
            .map(|(a, b)| a == b)
            .unwrap_or(false),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).map(|bv| json_equal(v, bv)).unwrap_or(false))
        }
        _ => false,
    }
}
