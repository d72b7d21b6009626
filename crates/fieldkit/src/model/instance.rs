use super::{validate, Extra, Model};
use crate::{app::Violation, stmt::Value, Error, Result};

use indexmap::IndexMap;

/// A validated model instance.
#[derive(Debug, Clone)]
pub struct Instance {
    model: Model,

    /// Field values by field name, in field order
    values: IndexMap<String, Value>,

    /// Unknown input kept under `Extra::Allow`
    extra: IndexMap<String, Value>,
}

impl Instance {
    pub(super) fn new(
        model: Model,
        values: IndexMap<String, Value>,
        extra: IndexMap<String, Value>,
    ) -> Self {
        Self {
            model,
            values,
            extra,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Returns the value of a field, or of an extra key kept on input.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).or_else(|| self.extra.get(name))
    }

    /// Field values by field name.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }

    /// Assigns a field.
    ///
    /// Fails if the model does not allow mutation. Under
    /// `validate_assignment`, the field must allow mutation and the value is
    /// validated like input; otherwise it is stored as given.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let config = self.model.config();

        if !config.allow_mutation {
            return Err(self.violation(name, Violation::Immutable));
        }

        let Some((ty, info)) = self.model.field(name) else {
            if config.extra == Extra::Allow {
                self.extra.insert(name.to_string(), value);
                return Ok(());
            }
            return Err(self.violation(name, Violation::Extra));
        };

        let value = if config.validate_assignment {
            if !info.constraints.is_mutable() {
                return Err(self.violation(name, Violation::Immutable));
            }

            validate::check_field(&self.model, name, ty, info, value)
                .map_err(|violation| self.violation(name, violation))?
        } else {
            value
        };

        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Encodes the instance as a JSON object keyed by field name.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .values
            .iter()
            .chain(&self.extra)
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();

        serde_json::Value::Object(object)
    }

    /// Returns the field values keyed by storage key, ready to be written to
    /// the underlying record.
    pub fn to_record(&self) -> IndexMap<String, Value> {
        self.model
            .fields()
            .iter()
            .filter_map(|(name, (_, info))| {
                let value = self.values.get(name)?;
                Some((info.storage_key.clone(), value.clone()))
            })
            .collect()
    }

    fn violation(&self, name: &str, violation: Violation) -> Error {
        Error::validation(self.model.name(), vec![(name.to_string(), violation)])
    }
}
