use super::Error;
use crate::schema::app::Violation;

/// Error when model data fails validation.
///
/// Every failing field is collected, so a single error reports all of them.
#[derive(Debug)]
pub(super) struct ValidationError {
    model: Box<str>,
    errors: Vec<(String, Violation)>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{} validation error{} for {}",
            count,
            if count == 1 { "" } else { "s" },
            self.model
        )?;

        for (loc, violation) in &self.errors {
            write!(f, "\n{loc}\n  {violation}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates a validation error for `model` from per-field violations.
    pub fn validation(model: impl Into<String>, errors: Vec<(String, Violation)>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            model: model.into().into(),
            errors,
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }

    /// Returns the per-field violations of a validation error.
    pub fn violations(&self) -> &[(String, Violation)] {
        match self.kind() {
            super::ErrorKind::Validation(err) => &err.errors,
            _ => &[],
        }
    }

    /// Returns the number of failing fields, or `0` for other kinds of error.
    pub fn validation_count(&self) -> usize {
        self.violations().len()
    }
}
