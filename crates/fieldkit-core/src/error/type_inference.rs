use super::Error;

/// Error when no semantic type can be inferred for a column's native type.
///
/// This occurs when the native type has no entry in the built-in type table,
/// carries no direct type marker, and does not decorate an implementation
/// type that could be resolved instead.
#[derive(Debug)]
pub(super) struct TypeInferenceError {
    column: Box<str>,
}

impl std::error::Error for TypeInferenceError {}

impl core::fmt::Display for TypeInferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not infer the semantic type for column `{}`; \
             check that the column type has a direct type mapping or an implementation type",
            self.column
        )
    }
}

impl Error {
    /// Creates a type inference error for the named column.
    pub fn type_inference(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeInference(TypeInferenceError {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a type inference error.
    pub fn is_type_inference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeInference(_))
    }
}
