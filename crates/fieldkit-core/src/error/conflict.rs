use super::Error;

/// Error when mutually exclusive inputs are supplied together.
///
/// This occurs when:
/// - both `include` and `exclude` are given when assembling a field set
/// - column metadata sets both `default` and `default_factory`
#[derive(Debug)]
pub(super) struct ConflictError {
    message: Box<str>,
}

impl std::error::Error for ConflictError {}

impl core::fmt::Display for ConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "conflict: {}", self.message)
    }
}

impl Error {
    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Conflict(ConflictError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Conflict(_))
    }
}
