use super::{Extra, Model};
use crate::{
    app::{FieldInfo, Violation},
    stmt::{Type, Value},
    Error, Result,
};

use indexmap::IndexMap;

pub(super) struct Validated {
    pub(super) values: IndexMap<String, Value>,
    pub(super) extra: IndexMap<String, Value>,
}

/// Validates keyword input against every field of `model`, collecting all
/// violations before failing.
pub(super) fn validate(model: &Model, mut input: IndexMap<String, Value>) -> Result<Validated> {
    let config = model.config();
    let mut values = IndexMap::with_capacity(model.fields().len());
    let mut errors = vec![];

    for (name, (ty, info)) in model.fields() {
        let key = info.input_key(name);
        let supplied = match input.shift_remove(key) {
            Some(value) => Some(value),
            None if config.populate_by_name && key != name => input.shift_remove(name.as_str()),
            None => None,
        };

        match supplied {
            Some(value) => match check_field(model, name, ty, info, value) {
                Ok(value) => {
                    values.insert(name.clone(), value);
                }
                Err(violation) => errors.push((key.to_string(), violation)),
            },
            // Defaults are trusted and not validated
            None => match info.default.produce() {
                Some(value) => {
                    values.insert(name.clone(), value);
                }
                None => errors.push((key.to_string(), Violation::Missing)),
            },
        }
    }

    let mut extra = IndexMap::new();
    match config.extra {
        Extra::Ignore => {}
        Extra::Allow => extra = input,
        Extra::Forbid => errors.extend(input.into_keys().map(|key| (key, Violation::Extra))),
    }

    if !errors.is_empty() {
        tracing::trace!(model = %model.name(), errors = errors.len(), "validation failed");
        return Err(Error::validation(model.name(), errors));
    }

    Ok(Validated { values, extra })
}

/// Checks one supplied value against its field, returning the value
/// converted to the field type.
pub(super) fn check_field(
    model: &Model,
    name: &str,
    ty: &Type,
    info: &FieldInfo,
    value: Value,
) -> std::result::Result<Value, Violation> {
    if value.is_null() {
        return if ty.is_option() {
            Ok(value)
        } else {
            Err(Violation::NoneNotAllowed)
        };
    }

    let value = ty.cast(value).map_err(|_| Violation::Type {
        expected: ty.to_string(),
    })?;

    if info.constraints.constant {
        let expected = info.default_value().cloned().unwrap_or_default();
        if value != expected {
            return Err(Violation::Const(expected));
        }
    }

    info.constraints.check(&value)?;

    if let (Some(regex), Some(s)) = (model.pattern(name), value.as_str()) {
        if !regex.is_match(s) {
            return Err(Violation::Pattern(
                info.constraints.regex.clone().unwrap_or_default(),
            ));
        }
    }

    Ok(value)
}
