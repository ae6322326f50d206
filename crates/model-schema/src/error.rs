use thiserror::Error;
use validation_rule::PatternError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// The property's type tag is missing or not one of the known types.
    #[error(
        "unknown type: {} (property '{property}')",
        .type_.as_deref().unwrap_or("undefined")
    )]
    UnknownPropertyType {
        property: String,
        type_: Option<String>,
    },

    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("invalid pattern for property '{property}': {source}")]
    InvalidPattern {
        property: String,
        source: PatternError,
    },

    #[error("bound 10^{digits} - 1 out of range for property '{property}'")]
    BoundOverflow { property: String, digits: u32 },
}
