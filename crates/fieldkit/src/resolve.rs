//! Native column type to semantic type resolution.

mod registry;
pub use registry::lookup;

use crate::{db, stmt, Error, Result};

/// Resolves the semantic type of a column, without optionality.
///
/// Nullability is applied by the field builder.
pub fn infer_type(column: &db::Column) -> Result<stmt::Type> {
    resolve(&column.name, &column.ty)
}

/// Resolves a native type to its semantic type.
///
/// `column` only names the column in the error raised when no mapping
/// exists.
///
/// * Scalars map through the built-in registry.
/// * A decorator's own type marker wins over its implementation type, which
///   is resolved only as a fallback.
/// * Arrays resolve their item type first and become a list of it.
/// * Enumerations resolve to their labels, never to their backing
///   representation.
pub fn resolve(column: &str, ty: &db::Type) -> Result<stmt::Type> {
    match ty {
        db::Type::Scalar(scalar) => scalar
            .kind()
            .and_then(lookup)
            .cloned()
            .ok_or_else(|| Error::type_inference(column)),
        db::Type::Decorated(decorated) => match (&decorated.ty, &decorated.impl_ty) {
            (Some(ty), _) => Ok(ty.clone()),
            (None, Some(impl_ty)) => resolve(column, impl_ty),
            (None, None) => Err(Error::type_inference(column)),
        },
        db::Type::Array(item) => Ok(stmt::Type::list(resolve(column, item)?)),
        db::Type::Enum(ty) => Ok(ty.to_stmt().into()),
    }
}
