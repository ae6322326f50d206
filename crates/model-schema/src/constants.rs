/// Identifier of the base entity every other model inherits properties from.
pub const BASE_MODEL_ID: &str = "tradle.Object";

/// Identifier of the model that describes models.
pub const META_MODEL_ID: &str = "tradle.Model";

/// Prefix every `bytes` value must carry.
pub const BYTES_PATTERN: &str = "^(hex|base64):";

/// `keyboard` hint marking a string property as an email address.
pub const EMAIL_KEYBOARD: &str = "email-address";

/// Element type assumed for arrays whose `items` carry no `type`.
pub const DEFAULT_ITEMS_TYPE: &str = "object";
