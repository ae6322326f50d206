//! Model to rule mapping.

use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::{debug, trace};
use validation_rule::{NumRule, Pattern, Rule, RuleBuilder, StrRule, TimestampRule};

use crate::bounds::DigitBounds;
use crate::constants::BYTES_PATTERN;
use crate::error::MapError;
use crate::model::{Model, PropertyDef, PropertyType};
use crate::options::MapperOptions;
use crate::predicates::{DefaultPredicates, PropertyPredicates};
use crate::registry::ModelRegistry;

/// Property name to rule.
pub type MappedProperties = IndexMap<String, Rule>;

/// Derives validation rules from model definitions.
///
/// The base model's rules are computed on first use and kept for the life of
/// the mapper; the base definition must not change while the mapper is in
/// use. Racing first callers each compute the same rules and the first
/// stored result wins.
#[derive(Debug)]
pub struct SchemaMapper<P = DefaultPredicates> {
    options: MapperOptions,
    predicates: P,
    base: OnceLock<MappedProperties>,
}

impl SchemaMapper<DefaultPredicates> {
    pub fn new() -> Self {
        Self::with_options(MapperOptions::default())
    }

    pub fn with_options(options: MapperOptions) -> Self {
        Self::with_predicates(options, DefaultPredicates)
    }
}

impl Default for SchemaMapper<DefaultPredicates> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PropertyPredicates> SchemaMapper<P> {
    pub fn with_predicates(options: MapperOptions, predicates: P) -> Self {
        Self {
            options,
            predicates,
            base: OnceLock::new(),
        }
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Rules for every property of `model`, plus the base model's rules
    /// unless `model` is the base model. The model's own rules win on a name
    /// collision. `model.required` is not applied.
    pub fn map_model(
        &self,
        model: &Model,
        models: &dyn ModelRegistry,
    ) -> Result<MappedProperties, MapError> {
        let own = self.map_own_properties(model, models)?;
        if model.id == self.options.base_model_id {
            return Ok(own);
        }

        let mut merged = self.base_properties(models)?.clone();
        merged.extend(own);
        Ok(merged)
    }

    /// The base model's rules, computed on first call.
    ///
    /// The model stored under `base_model_id` is never merged with itself,
    /// whatever its own `id` says.
    pub fn base_properties(&self, models: &dyn ModelRegistry) -> Result<&MappedProperties, MapError> {
        if let Some(base) = self.base.get() {
            return Ok(base);
        }
        let id = &self.options.base_model_id;
        let base_model = models
            .get(id)
            .ok_or_else(|| MapError::ModelNotFound(id.clone()))?;
        let mapped = self.map_own_properties(base_model, models)?;
        debug!(model = %id, properties = mapped.len(), "cached base model rules");
        Ok(self.base.get_or_init(|| mapped))
    }

    fn map_own_properties(
        &self,
        model: &Model,
        models: &dyn ModelRegistry,
    ) -> Result<MappedProperties, MapError> {
        debug!(model = %model.id, properties = model.properties.len(), "mapping model");
        let mut own = MappedProperties::with_capacity(model.properties.len());
        for (property_name, property) in &model.properties {
            let rule = self.map_property(property_name, property, model, models)?;
            own.insert(property_name.clone(), rule);
        }
        Ok(own)
    }

    /// One object rule covering the whole model, every key optional.
    pub fn model_rule(&self, model: &Model, models: &dyn ModelRegistry) -> Result<Rule, MapError> {
        Ok(RuleBuilder::new().object(self.map_model(model, models)?))
    }

    /// Rule for a single property of `model`.
    pub fn map_property(
        &self,
        property_name: &str,
        property: &PropertyDef,
        model: &Model,
        models: &dyn ModelRegistry,
    ) -> Result<Rule, MapError> {
        let t = RuleBuilder::new();
        let type_ = property
            .property_type()
            .ok_or_else(|| MapError::UnknownPropertyType {
                property: property_name.to_string(),
                type_: property.type_.clone(),
            })?;
        trace!(model = %model.id, property = property_name, type_ = %type_, "mapping property");

        let rule = match type_ {
            PropertyType::String => self.string_rule(property_name, property)?,
            PropertyType::Bytes => bytes_rule(),
            PropertyType::Number => number_rule(property_name, property)?,
            PropertyType::Date => TimestampRule::new().raw().into(),
            PropertyType::Boolean => t.bool(),
            PropertyType::Array => {
                let element = property.element_def();
                t.Array(self.map_property(property_name, &element, model, models)?)
            }
            PropertyType::Object => self.object_rule(property, model, models),
        };
        Ok(rule)
    }

    fn string_rule(&self, property_name: &str, property: &PropertyDef) -> Result<Rule, MapError> {
        let mut rule = StrRule::new();
        if self.predicates.is_email_property(property_name, property) {
            rule = rule.email();
        } else if let Some(source) = &property.pattern {
            rule = rule
                .regex(source.as_str())
                .map_err(|source| MapError::InvalidPattern {
                    property: property_name.to_string(),
                    source,
                })?;
        }
        let bounds = DigitBounds::of(property_name, property)?;
        if let Some(max) = bounds.max {
            rule = rule.max(max);
        }
        if let Some(min) = bounds.min {
            rule = rule.min(min);
        }
        Ok(rule.into())
    }

    fn object_rule(&self, property: &PropertyDef, model: &Model, models: &dyn ModelRegistry) -> Rule {
        let t = RuleBuilder::new();
        if self.predicates.is_inlined_property(property, model, models) {
            return t.obj();
        }
        if self.predicates.get_ref(property) == Some(self.options.meta_model_id.as_str()) {
            return t.obj();
        }
        reference_rule()
    }
}

fn number_rule(property_name: &str, property: &PropertyDef) -> Result<Rule, MapError> {
    let mut rule = NumRule::new();
    let bounds = DigitBounds::of(property_name, property)?;
    if let Some(max) = bounds.max {
        rule = rule.max(max as f64);
    }
    if let Some(min) = bounds.min {
        rule = rule.min(min as f64);
    }
    Ok(rule.into())
}

/// Shared rule for every `bytes` property: a string tagged with its encoding.
fn bytes_rule() -> Rule {
    static BYTES: OnceLock<Rule> = OnceLock::new();
    BYTES
        .get_or_init(|| StrRule::new().pattern(Pattern::new(BYTES_PATTERN).unwrap()).into())
        .clone()
}

/// `{ id: string, title: string | "" | null }`, both optional, nothing else.
fn reference_rule() -> Rule {
    let t = RuleBuilder::new();
    t.object([
        ("id", t.str()),
        ("title", t.maybe(StrRule::new().allow_empty().into())),
    ])
}
