//! Property classification used by the mapper.

use crate::constants::EMAIL_KEYBOARD;
use crate::model::{Model, PropertyDef, PropertyType};
use crate::registry::ModelRegistry;

/// Questions the mapper asks about a property but does not answer itself.
pub trait PropertyPredicates {
    /// Whether a string property holds an email address.
    fn is_email_property(&self, property_name: &str, property: &PropertyDef) -> bool;

    /// Whether an object property's data is embedded in the parent record
    /// rather than stored as a separate entity.
    fn is_inlined_property(
        &self,
        property: &PropertyDef,
        model: &Model,
        models: &dyn ModelRegistry,
    ) -> bool;

    /// Identifier of the model an object property refers to.
    fn get_ref<'a>(&self, property: &'a PropertyDef) -> Option<&'a str>;
}

/// Predicates driven by the property's own metadata.
///
/// - email: a `string` with the `email-address` keyboard, or named
///   `email`/`emailAddress` (case-insensitive);
/// - inlined: `inlined: true` or an anonymous `properties` shape on the
///   property or its items, or a reference to a model marked `inlined`;
/// - ref: `ref`, else `items.ref`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPredicates;

impl PropertyPredicates for DefaultPredicates {
    fn is_email_property(&self, property_name: &str, property: &PropertyDef) -> bool {
        if property.property_type() != Some(PropertyType::String) {
            return false;
        }
        if property.keyboard.as_deref() == Some(EMAIL_KEYBOARD) {
            return true;
        }
        let name = property_name.to_ascii_lowercase();
        name == "email" || name == "emailaddress"
    }

    fn is_inlined_property(
        &self,
        property: &PropertyDef,
        _model: &Model,
        models: &dyn ModelRegistry,
    ) -> bool {
        if property.inlined == Some(true) || property.properties.is_some() {
            return true;
        }
        if let Some(items) = &property.items {
            if items.inlined == Some(true) || items.properties.is_some() {
                return true;
            }
        }
        self.get_ref(property)
            .and_then(|id| models.get(id))
            .map(|m| m.inlined == Some(true))
            .unwrap_or(false)
    }

    fn get_ref<'a>(&self, property: &'a PropertyDef) -> Option<&'a str> {
        property
            .ref_
            .as_deref()
            .or_else(|| property.items.as_ref().and_then(|i| i.ref_.as_deref()))
    }
}
