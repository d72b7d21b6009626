use super::Bound;
use crate::stmt::Value;

use serde_json::Number;
use std::fmt;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required field was not supplied
    Missing,

    /// The no-value marker was supplied for a non-optional field
    NoneNotAllowed,

    /// The value could not be converted to the field's type
    Type { expected: String },

    /// String or byte length outside of the declared bounds
    Length {
        len: usize,
        min: Option<u64>,
        max: Option<u64>,
    },

    /// List length outside of the declared bounds
    Items {
        len: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    /// Numeric bound not satisfied
    Bound { bound: Bound, limit: Number },

    /// Value is not a multiple of the declared step
    MultipleOf(Number),

    /// String does not match the declared pattern
    Pattern(String),

    /// Constant field given a value other than its default
    Const(Value),

    /// Input key that matches no field
    Extra,

    /// Assignment to a field or model that does not allow mutation
    Immutable,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("field required"),
            Self::NoneNotAllowed => f.write_str("none is not an allowed value"),
            Self::Type { expected } => write!(f, "value is not a valid {expected}"),
            Self::Length { len, min, max } => {
                if min == max && min.is_some() {
                    return write!(
                        f,
                        "value length {} does not match required length {}",
                        len,
                        min.unwrap_or_default()
                    );
                }

                match (min, max) {
                    (Some(min), _) if (*len as u64) < *min => {
                        write!(f, "value length {len} is too short (minimum: {min})")
                    }
                    (_, Some(max)) if (*len as u64) > *max => {
                        write!(f, "value length {len} is too long (maximum: {max})")
                    }
                    _ => f.write_str("length constraint violation"),
                }
            }
            Self::Items { len, min, max } => match (min, max) {
                (Some(min), _) if len < min => {
                    write!(f, "list has {len} items, expected at least {min}")
                }
                (_, Some(max)) if len > max => {
                    write!(f, "list has {len} items, expected at most {max}")
                }
                _ => f.write_str("item count constraint violation"),
            },
            Self::Bound { bound, limit } => {
                write!(f, "ensure this value is {} {limit}", bound.describe())
            }
            Self::MultipleOf(step) => write!(f, "ensure this value is a multiple of {step}"),
            Self::Pattern(pattern) => write!(f, "string does not match regex \"{pattern}\""),
            Self::Const(expected) => write!(f, "unexpected value; permitted: {}", expected.to_json()),
            Self::Extra => f.write_str("extra fields not permitted"),
            Self::Immutable => f.write_str("field is immutable and does not support assignment"),
        }
    }
}
