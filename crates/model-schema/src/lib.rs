//! `model-schema` — validation rules derived from declarative model definitions.
//!
//! A model names its properties and gives each a semantic type (`string`,
//! `bytes`, `number`, `date`, `boolean`, `array`, `object`). [`SchemaMapper`]
//! turns each property into a [`validation_rule::Rule`] and merges in the
//! rules of the base model every other model inherits from.
//!
//! ```
//! use model_schema::{Model, Models, PropertyDef, PropertyType, SchemaMapper};
//! use serde_json::json;
//! use validation_rule::{validate, ValidatorOptions};
//!
//! let models = Models::new()
//!     .with(Model::new("tradle.Object").with_property("_time", PropertyDef::new(PropertyType::Date)))
//!     .with(Model::new("tradle.Age").with_property("years", PropertyDef::new(PropertyType::Number).max_length(3)));
//!
//! let mapper = SchemaMapper::new();
//! let rules = mapper.map_model(models.iter().nth(1).unwrap(), &models).unwrap();
//! assert!(rules.contains_key("_time"));
//!
//! let opts = ValidatorOptions::default();
//! assert!(validate(&json!(999), &rules["years"], &opts, &[]).is_ok());
//! assert!(validate(&json!(1000), &rules["years"], &opts, &[]).is_err());
//! ```
//!
//! Requiredness is deliberately left out: `Model::required` is never turned
//! into a mandatory rule here.

pub mod bounds;
pub mod constants;
pub mod error;
pub mod mapper;
pub mod model;
pub mod options;
pub mod predicates;
pub mod registry;

pub use bounds::{digit_bound, DigitBounds};
pub use error::MapError;
pub use mapper::{MappedProperties, SchemaMapper};
pub use model::{Model, PropertyDef, PropertyType};
pub use options::MapperOptions;
pub use predicates::{DefaultPredicates, PropertyPredicates};
pub use registry::{ModelRegistry, Models};
