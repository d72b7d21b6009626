use super::DefaultFactory;
use crate::{stmt::Value, Result};

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Explicit per-column field metadata.
///
/// Every key is optional. An absent key means the field builder computes the
/// value from the column itself. Unknown keys are ignored when deserializing,
/// so metadata shared with other tools can be passed in unchanged.
///
/// Two keys distinguish "absent" from "explicitly no value":
///
/// * `default`: `Some(Value::Null)` overrides the column default with the
///   no-value marker.
/// * `description`: `Some(None)` suppresses the column's doc string.
///
/// ```
/// # use fieldkit_core::schema::app::FieldMeta;
/// # use fieldkit_core::stmt::Value;
/// let meta = FieldMeta::from_json(serde_json::json!({
///     "max_length": 64,
///     "default": null,
///     "info": "ignored",
/// }))
/// .unwrap();
///
/// assert_eq!(meta.max_length, Some(64));
/// assert_eq!(meta.default, Some(Value::Null));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldMeta {
    pub alias: Option<String>,

    pub allow_mutation: Option<bool>,

    /// The field value must equal its default
    #[serde(rename = "const", deserialize_with = "deserialize_truthy")]
    pub constant: bool,

    #[serde(deserialize_with = "deserialize_present")]
    pub default: Option<Value>,

    /// Only settable from Rust
    #[serde(skip)]
    pub default_factory: Option<DefaultFactory>,

    #[serde(deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,

    pub example: Option<Value>,

    pub ge: Option<Number>,

    pub gt: Option<Number>,

    pub le: Option<Number>,

    pub lt: Option<Number>,

    pub max_items: Option<usize>,

    pub min_items: Option<usize>,

    pub max_length: Option<u64>,

    pub min_length: Option<u64>,

    pub multiple_of: Option<Number>,

    pub regex: Option<String>,

    pub title: Option<String>,
}

impl FieldMeta {
    /// Reads metadata from a free-form JSON object.
    pub fn from_json(value: serde_json::Value) -> Result<FieldMeta> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn default_factory(mut self, f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default_factory = Some(DefaultFactory::new(f));
        self
    }
}

/// Deserializes a key that is present in the input, keeping an explicit
/// `null` as `Some(null)` instead of collapsing it into "absent".
fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Accepts any JSON value and reads it as a flag: `null`, `false`, zero and
/// empty strings, lists and objects are false.
fn deserialize_truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value as Json;

    Ok(match Json::deserialize(deserializer)? {
        Json::Null => false,
        Json::Bool(b) => b,
        Json::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(items) => !items.is_empty(),
        Json::Object(fields) => !fields.is_empty(),
    })
}
