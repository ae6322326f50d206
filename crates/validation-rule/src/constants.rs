//! Validation error codes.

/// Error code produced by the validator when a value does not satisfy a rule.
///
/// The discriminant doubles as the numeric `errno` in object-mode results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValidationError {
    Str = 0,
    StrEmpty,
    StrLen,
    Pattern,
    Email,
    Num,
    Min,
    Max,
    Timestamp,
    Bool,
    Arr,
    Obj,
    Keys,
    Key,
    Const,
    Or,
}

impl ValidationError {
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::StrEmpty => "STR_EMPTY",
            Self::StrLen => "STR_LEN",
            Self::Pattern => "PATTERN",
            Self::Email => "EMAIL",
            Self::Num => "NUM",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Timestamp => "TIMESTAMP",
            Self::Bool => "BOOL",
            Self::Arr => "ARR",
            Self::Obj => "OBJ",
            Self::Keys => "KEYS",
            Self::Key => "KEY",
            Self::Const => "CONST",
            Self::Or => "OR",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Str => "Not a string.",
            Self::StrEmpty => "String is not allowed to be empty.",
            Self::StrLen => "Invalid string length.",
            Self::Pattern => "String does not match pattern.",
            Self::Email => "Not a valid email address.",
            Self::Num => "Not a number.",
            Self::Min => "Value is too small.",
            Self::Max => "Value is too large.",
            Self::Timestamp => "Not a numeric timestamp.",
            Self::Bool => "Not a boolean.",
            Self::Arr => "Not an array.",
            Self::Obj => "Not an object.",
            Self::Keys => "Unknown key.",
            Self::Key => "Missing key.",
            Self::Const => "Invalid constant.",
            Self::Or => "None of types matched.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
