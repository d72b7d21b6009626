use super::Error;

/// Error when a column's declared storage length and its `max_length`
/// metadata disagree.
///
/// The declared length protects the storage layer from truncation, so the
/// metadata is never allowed to silently widen (or narrow) it.
#[derive(Debug)]
pub(super) struct ConstraintConflictError {
    column: Box<str>,
    declared: u64,
    requested: u64,
}

impl std::error::Error for ConstraintConflictError {}

impl core::fmt::Display for ConstraintConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "max_length ({}) differs from length set for column type ({}) on column `{}`; \
             either remove max_length from the column metadata (preferred) or set them to equal values",
            self.requested, self.declared, self.column
        )
    }
}

impl Error {
    /// Creates a constraint conflict error.
    ///
    /// `declared` is the length of the column's native type, `requested` the
    /// `max_length` found in the column metadata.
    pub fn constraint_conflict(column: impl Into<String>, declared: u64, requested: u64) -> Error {
        Error::from(super::ErrorKind::ConstraintConflict(
            ConstraintConflictError {
                column: column.into().into(),
                declared,
                requested,
            },
        ))
    }

    /// Returns `true` if this error is a constraint conflict error.
    pub fn is_constraint_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConstraintConflict(_))
    }
}
