use serde::{Deserialize, Serialize};

use crate::constants::{BASE_MODEL_ID, META_MODEL_ID};

/// Well-known model identifiers the mapper keys its decisions on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapperOptions {
    /// Model whose properties every other model inherits.
    pub base_model_id: String,
    /// Model describing models; references to it accept any object.
    pub meta_model_id: String,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            base_model_id: BASE_MODEL_ID.to_string(),
            meta_model_id: META_MODEL_ID.to_string(),
        }
    }
}
