//! Model and property definitions.
//!
//! Both deserialise from the JSON shape models are authored in
//! (`maxLength`, `ref`, `subClassOf`, ...). Fields this crate does not read
//! are kept in `extra` so a definition survives a round trip untouched.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DEFAULT_ITEMS_TYPE;

/// A named entity type: its properties and the names callers treat as required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_class_of: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlined: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, property: PropertyDef) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn inlined(mut self) -> Self {
        self.inlined = Some(true);
        self
    }
}

/// The seven property types a model may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    String,
    Bytes,
    Number,
    Date,
    Boolean,
    Array,
    Object,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "bytes" => Ok(Self::Bytes),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(other.to_string()),
        }
    }
}

/// One property of a model.
///
/// The type tag is kept as written; [`PropertyDef::property_type`] parses it.
/// `max_length`/`min_length` are decimal digit counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertyDef>>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, PropertyDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PropertyDef {
    pub fn new(type_: PropertyType) -> Self {
        Self {
            type_: Some(type_.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Property with an arbitrary, possibly unknown, type tag.
    pub fn with_type_tag(tag: impl Into<String>) -> Self {
        Self {
            type_: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn max_length(mut self, digits: u32) -> Self {
        self.max_length = Some(digits);
        self
    }

    pub fn min_length(mut self, digits: u32) -> Self {
        self.min_length = Some(digits);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn items(mut self, items: PropertyDef) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn reference(mut self, model_id: impl Into<String>) -> Self {
        self.ref_ = Some(model_id.into());
        self
    }

    pub fn inlined(mut self) -> Self {
        self.inlined = Some(true);
        self
    }

    pub fn keyboard(mut self, keyboard: impl Into<String>) -> Self {
        self.keyboard = Some(keyboard.into());
        self
    }

    /// Parsed type tag; `None` when the tag is missing or unknown.
    pub fn property_type(&self) -> Option<PropertyType> {
        self.type_.as_deref().and_then(|t| t.parse().ok())
    }

    /// Definition an array's elements are checked against.
    ///
    /// Starts from this property and overlays every field `items` sets. The
    /// type comes from `items` alone, defaulting to `object`, and `items` is
    /// never inherited from the array itself.
    pub fn element_def(&self) -> PropertyDef {
        let items = self.items.as_deref().cloned().unwrap_or_default();
        let mut extra = self.extra.clone();
        extra.extend(items.extra);
        PropertyDef {
            type_: Some(
                items
                    .type_
                    .unwrap_or_else(|| DEFAULT_ITEMS_TYPE.to_string()),
            ),
            max_length: items.max_length.or(self.max_length),
            min_length: items.min_length.or(self.min_length),
            pattern: items.pattern.or_else(|| self.pattern.clone()),
            items: items.items,
            ref_: items.ref_.or_else(|| self.ref_.clone()),
            inlined: items.inlined.or(self.inlined),
            properties: items.properties.or_else(|| self.properties.clone()),
            keyboard: items.keyboard.or_else(|| self.keyboard.clone()),
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_model() {
        let model: Model = serde_json::from_value(json!({
            "type": "tradle.Model",
            "id": "tradle.Name",
            "title": "Name",
            "properties": {
                "givenName": { "type": "string", "maxLength": 2 },
                "photos": { "type": "array", "items": { "ref": "tradle.Photo" } }
            },
            "required": ["givenName"]
        }))
        .unwrap();

        assert_eq!(model.id, "tradle.Name");
        assert_eq!(model.required, vec!["givenName".to_string()]);
        assert_eq!(model.extra.get("type"), Some(&json!("tradle.Model")));
        let given = &model.properties["givenName"];
        assert_eq!(given.property_type(), Some(PropertyType::String));
        assert_eq!(given.max_length, Some(2));
        let photos = &model.properties["photos"];
        assert_eq!(
            photos.items.as_ref().unwrap().ref_.as_deref(),
            Some("tradle.Photo")
        );
    }

    #[test]
    fn unknown_tag_parses_to_none() {
        assert_eq!(PropertyDef::with_type_tag("enum").property_type(), None);
        assert_eq!(PropertyDef::default().property_type(), None);
        assert_eq!("date".parse::<PropertyType>(), Ok(PropertyType::Date));
    }

    #[test]
    fn element_def_defaults_to_object() {
        let arr = PropertyDef::new(PropertyType::Array).items(PropertyDef::default());
        assert_eq!(arr.element_def().property_type(), Some(PropertyType::Object));

        let bare = PropertyDef::new(PropertyType::Array);
        assert_eq!(bare.element_def().property_type(), Some(PropertyType::Object));
    }

    #[test]
    fn element_def_overlays_items() {
        let arr = PropertyDef::new(PropertyType::Array)
            .max_length(3)
            .pattern("^a")
            .items(PropertyDef::new(PropertyType::String).pattern("^b"));
        let element = arr.element_def();
        assert_eq!(element.property_type(), Some(PropertyType::String));
        assert_eq!(element.max_length, Some(3));
        assert_eq!(element.pattern.as_deref(), Some("^b"));
        assert!(element.items.is_none());
    }
}
