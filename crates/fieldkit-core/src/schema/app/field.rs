use super::{Constraints, DefaultFactory};
use crate::stmt::Value;

/// Descriptor of one model field, built from a table column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Key used to read and write the field in the underlying record
    pub storage_key: String,

    /// True if the field accepts the no-value marker
    pub optional: bool,

    /// How the field obtains a value when none is supplied
    pub default: FieldDefault,

    /// Validation constraints and schema annotations
    pub constraints: Constraints,
}

/// Default strategy of a field.
///
/// A field has exactly one of a fixed value or a factory, or is required.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// A value must be supplied
    Required,

    /// A fixed default value. `Value::Null` is the no-value default.
    Value(Value),

    /// A value produced on demand
    Factory(DefaultFactory),
}

impl FieldInfo {
    pub fn is_required(&self) -> bool {
        self.default.is_required()
    }

    /// Returns the fixed default value, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_value()
    }

    pub fn default_factory(&self) -> Option<&DefaultFactory> {
        match &self.default {
            FieldDefault::Factory(factory) => Some(factory),
            _ => None,
        }
    }

    /// The key the field accepts on input: its alias if set, otherwise `name`.
    pub fn input_key<'a>(&'a self, name: &'a str) -> &'a str {
        self.constraints.alias.as_deref().unwrap_or(name)
    }
}

impl FieldDefault {
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Produces the default for a new instance. Returns `None` for required
    /// fields.
    pub fn produce(&self) -> Option<Value> {
        match self {
            Self::Required => None,
            Self::Value(value) => Some(value.clone()),
            Self::Factory(factory) => Some(factory.call()),
        }
    }
}
