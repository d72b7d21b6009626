//! Field descriptors built from table columns.

mod default;
pub use default::{DefaultSource, DEFAULT_PRIORITY};

mod description;
pub use description::{DescriptionSource, DESCRIPTION_PRIORITY};

use crate::{app, db, resolve, stmt, Error, Result};

/// Builds the field of `column` from the column's own metadata.
pub fn make_field(column: &db::Column) -> Result<(stmt::Type, app::FieldInfo)> {
    build(column, &column.meta)
}

/// Builds the field of `column`, using `meta` as the explicit overrides.
///
/// The semantic type is wrapped as optional when the column is nullable.
/// Fails when:
///
/// * `meta` sets both `default` and `default_factory`,
/// * no semantic type can be inferred for the column type,
/// * the column type declares a length and `meta.max_length` differs.
pub fn build(column: &db::Column, meta: &app::FieldMeta) -> Result<(stmt::Type, app::FieldInfo)> {
    if meta.default.is_some() && meta.default_factory.is_some() {
        return Err(Error::conflict(format!(
            "`default` and `default_factory` are mutually exclusive on column `{}`",
            column.name
        )));
    }

    let mut ty = resolve::infer_type(column)?;
    if column.nullable {
        ty = stmt::Type::optional(ty);
    }

    let max_length = max_length(column, meta)?;
    let (source, default) = default::resolve(column, meta);

    // Fixed defaults take the field's representation when they can, so an
    // enumeration default is a label and an integer default of a float
    // field is a float.
    let default = match default {
        app::FieldDefault::Value(value) => {
            app::FieldDefault::Value(ty.cast(value.clone()).unwrap_or(value))
        }
        default => default,
    };

    let constraints = app::Constraints {
        alias: meta.alias.clone(),
        title: meta.title.clone(),
        description: description::resolve(column, meta),
        ge: meta.ge.clone(),
        gt: meta.gt.clone(),
        le: meta.le.clone(),
        lt: meta.lt.clone(),
        multiple_of: meta.multiple_of.clone(),
        min_length: meta.min_length,
        max_length,
        min_items: meta.min_items,
        max_items: meta.max_items,
        regex: meta.regex.clone(),
        allow_mutation: meta.allow_mutation,
        constant: meta.constant,
        example: meta.example.clone(),
    };

    tracing::trace!(column = %column.name, ty = %ty, default = ?source, "built field");

    Ok((
        ty,
        app::FieldInfo {
            storage_key: column.storage_key().to_string(),
            optional: column.nullable,
            default,
            constraints,
        },
    ))
}

/// The declared length of the column type protects the storage layer, so an
/// explicit `max_length` must agree with it.
fn max_length(column: &db::Column, meta: &app::FieldMeta) -> Result<Option<u64>> {
    match (column.ty.length(), meta.max_length) {
        (Some(declared), Some(requested)) if declared != requested => Err(
            Error::constraint_conflict(&column.name, declared, requested),
        ),
        (Some(declared), _) => Ok(Some(declared)),
        (None, requested) => Ok(requested),
    }
}
