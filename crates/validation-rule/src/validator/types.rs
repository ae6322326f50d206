use serde_json::Value;

/// How validation failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Only report that validation failed.
    Boolean,
    /// Report a JSON-encoded `[CODE, ...path]` string.
    String,
    /// Report code, errno, message and path.
    #[default]
    Object,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorOptions {
    pub errors: ErrorMode,
    /// Accept keys an object rule does not declare.
    pub skip_object_extra_fields_check: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Ok,
    BoolError,
    StringError(String),
    ObjectError {
        code: String,
        errno: u8,
        message: String,
        path: Vec<Value>,
    },
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}
