use super::TypeEnum;

use std::fmt;

/// A semantic type: the type a field takes in the generated model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Double precision floating point
    F64,

    /// Fixed-point decimal
    Decimal,

    /// String type
    String,

    /// Byte sequence
    Bytes,

    /// Civil date
    Date,

    /// Civil wall clock time
    Time,

    /// Civil date and time without a time zone
    DateTime,

    /// An instant in time (time zone aware)
    Timestamp,

    /// A signed duration
    Interval,

    /// 128-bit universally unique identifier
    Uuid,

    /// A generic mapping object (structured or opaque document)
    Json,

    /// An ordered sequence of a single type
    List(Box<Type>),

    /// A closed-choice enumeration
    Enum(TypeEnum),

    /// The inner type, or no value
    Option(Box<Type>),
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    /// Wraps `ty` as optional. Already optional types are returned unchanged.
    pub fn optional(ty: impl Into<Self>) -> Self {
        match ty.into() {
            ty @ Self::Option(_) => ty,
            ty => Self::Option(Box::new(ty)),
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns the type inside an `Option`, or `self` for non-optional types.
    pub fn unwrap_option(&self) -> &Type {
        match self {
            Self::Option(inner) => inner,
            _ => self,
        }
    }

    /// Returns the item type of a (possibly optional) list.
    pub fn list_item(&self) -> Option<&Type> {
        match self.unwrap_option() {
            Self::List(item) => Some(item),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("boolean"),
            Self::I16 | Self::I32 | Self::I64 => f.write_str("integer"),
            Self::F64 => f.write_str("float"),
            Self::Decimal => f.write_str("decimal"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("byte string"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
            Self::DateTime | Self::Timestamp => f.write_str("datetime"),
            Self::Interval => f.write_str("duration"),
            Self::Uuid => f.write_str("uuid"),
            Self::Json => f.write_str("dict"),
            Self::List(_) => f.write_str("list"),
            Self::Enum(_) => f.write_str("enumeration member"),
            Self::Option(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
