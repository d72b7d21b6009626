//! Validated models built from field sets.

mod config;
pub use config::{Extra, ModelConfig};

mod instance;
pub use instance::Instance;

mod json_schema;

mod validate;

use crate::{
    app::{FieldInfo, Violation},
    db, stmt, Assemble, Error, FieldSet, Result,
};

use indexmap::IndexMap;
use regex::Regex;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

/// A validated model type.
///
/// A model is an immutable schema artifact: an ordered set of typed fields
/// and a configuration. It validates keyword data into [`Instance`]s and
/// describes itself as a JSON Schema. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Model {
    inner: Arc<ModelInner>,
}

#[derive(Debug)]
struct ModelInner {
    name: String,
    fields: FieldSet,
    config: ModelConfig,

    /// Compiled `regex` constraints by field name
    patterns: IndexMap<String, Regex>,
}

/// Builds models from table definitions.
///
/// ```
/// use fieldkit::{db, ModelConfig, ModelFactory};
///
/// let table = db::Table::new("Test")
///     .column(db::Column::new("id", db::Type::integer()).primary_key())
///     .column(db::Column::new("number", db::Type::integer()));
///
/// let model = ModelFactory::new()
///     .config(ModelConfig::crud())
///     .exclude(["number"])
///     .build(&table)
///     .unwrap();
///
/// assert_eq!(model.name(), "Test");
/// assert_eq!(model.fields().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelFactory {
    name: Option<String>,
    config: ModelConfig,
    assemble: Assemble,
}

/// Builds a model with the default configuration from every column of
/// `table`.
pub fn model_from(table: &db::Table) -> Result<Model> {
    ModelFactory::new().build(table)
}

impl ModelFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the model. Defaults to the table name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assemble = self.assemble.include(names);
        self
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assemble = self.assemble.exclude(names);
        self
    }

    pub fn transform(
        mut self,
        f: impl Fn(stmt::Type, FieldInfo) -> (stmt::Type, FieldInfo) + Send + Sync + 'static,
    ) -> Self {
        self.assemble = self.assemble.transform(f);
        self
    }

    pub fn build(&self, table: &db::Table) -> Result<Model> {
        let fields = self.assemble.run(table)?;
        let name = self.name.as_deref().unwrap_or(&table.name);
        Model::new(name, fields, self.config.clone())
    }
}

impl Model {
    /// Creates a model from a field set.
    ///
    /// Fails when a `regex` constraint is not a valid pattern, when two
    /// fields accept the same input key, or when two enumerations share a
    /// name but not their labels.
    pub fn new(name: impl Into<String>, fields: FieldSet, config: ModelConfig) -> Result<Model> {
        let name = name.into();
        let mut patterns = IndexMap::new();
        let mut keys = HashSet::new();
        let mut enums = HashMap::new();

        for (field_name, (ty, info)) in &fields {
            for key in input_keys(field_name, info, &config) {
                if !keys.insert(key) {
                    return Err(Error::invalid_schema(format!(
                        "input key `{key}` of model `{name}` is used by more than one field"
                    )));
                }
            }

            // Enumerations are published by name in the JSON schema
            if let Some(ty) = enum_type(ty) {
                match enums.insert(ty.name.as_str(), &ty.labels) {
                    Some(labels) if *labels != ty.labels => {
                        return Err(Error::invalid_schema(format!(
                            "enumeration `{}` of model `{name}` is declared with different labels",
                            ty.name
                        )));
                    }
                    _ => {}
                }
            }

            if let Some(pattern) = &info.constraints.regex {
                // Patterns only need to match at the start of the value
                let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|err| {
                    Error::from(anyhow::Error::from(err)).context(Error::invalid_schema(format!(
                        "invalid regex for field `{field_name}`"
                    )))
                })?;
                patterns.insert(field_name.clone(), regex);
            }
        }

        tracing::debug!(model = %name, fields = fields.len(), "built model");

        Ok(Model {
            inner: Arc::new(ModelInner {
                name,
                fields,
                config,
                patterns,
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn fields(&self) -> &FieldSet {
        &self.inner.fields
    }

    pub fn field(&self, name: &str) -> Option<&(stmt::Type, FieldInfo)> {
        self.inner.fields.get(name)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.inner.config
    }

    /// Validates keyword data into an instance.
    ///
    /// Fields are looked up by their input key (the alias when set). Missing
    /// fields take their default; all failing fields are reported together.
    pub fn construct<I, K, V>(&self, data: I) -> Result<Instance>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<stmt::Value>,
    {
        let input = data
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        self.validate(input)
    }

    /// Validates a JSON object into an instance.
    pub fn parse_json(&self, json: serde_json::Value) -> Result<Instance> {
        let serde_json::Value::Object(object) = json else {
            return Err(Error::validation(
                self.name(),
                vec![(
                    "__root__".to_string(),
                    Violation::Type {
                        expected: "dict".to_string(),
                    },
                )],
            ));
        };

        let input = object
            .into_iter()
            .map(|(key, value)| (key, stmt::Value::from(value)))
            .collect();

        self.validate(input)
    }

    /// Validates a storage record, read by each field's storage key.
    ///
    /// Record keys that match no field are ignored. Requires `orm_mode`.
    pub fn from_record<I, K, V>(&self, record: I) -> Result<Instance>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<stmt::Value>,
    {
        if !self.config().orm_mode {
            return Err(Error::unsupported_feature(format!(
                "loading model `{}` from a record requires `orm_mode`",
                self.name()
            )));
        }

        let mut record: IndexMap<String, stmt::Value> = record
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let mut input = IndexMap::with_capacity(record.len());
        for (name, (_, info)) in self.fields() {
            if let Some(value) = record.shift_remove(&info.storage_key) {
                input.insert(info.input_key(name).to_string(), value);
            }
        }

        self.validate(input)
    }

    /// Describes the model as a JSON Schema object.
    ///
    /// Properties are keyed by input key and titled after it unless a title
    /// is set. Enumerations are emitted once under `definitions` and
    /// referenced from their fields.
    pub fn json_schema(&self) -> serde_json::Value {
        json_schema::json_schema(self)
    }

    fn validate(&self, input: IndexMap<String, stmt::Value>) -> Result<Instance> {
        let validated = validate::validate(self, input)?;
        Ok(Instance::new(self.clone(), validated.values, validated.extra))
    }

    fn pattern(&self, field: &str) -> Option<&Regex> {
        self.inner.patterns.get(field)
    }
}

/// The enumeration a field holds, through optional and list wrappers.
fn enum_type(ty: &stmt::Type) -> Option<&stmt::TypeEnum> {
    match ty {
        stmt::Type::Enum(ty) => Some(ty),
        stmt::Type::Option(inner) | stmt::Type::List(inner) => enum_type(inner),
        _ => None,
    }
}

/// Keys under which a field is accepted on input.
fn input_keys<'a>(name: &'a str, info: &'a FieldInfo, config: &ModelConfig) -> Vec<&'a str> {
    match info.constraints.alias.as_deref() {
        Some(alias) if alias != name && config.populate_by_name => vec![alias, name],
        Some(alias) => vec![alias],
        None => vec![name],
    }
}
