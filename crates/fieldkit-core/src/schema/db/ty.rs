use crate::stmt;

use std::fmt;

/// Native storage type of a column.
///
/// A native type is one of:
///
/// * a [`Scalar`] storage type (`INTEGER`, `VARCHAR(64)`, ...),
/// * a [`Decorated`] type that wraps an implementation type and may carry
///   its own semantic type marker,
/// * an `Array` of another native type,
/// * an enumeration ([`TypeEnum`]) with an ordered set of labels.
///
/// Type resolution is an exhaustive match over these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Scalar(Scalar),
    Decorated(Decorated),
    Array(Box<Type>),
    Enum(TypeEnum),
}

/// Built-in scalar storage types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// A boolean value
    Boolean,

    /// 2-byte signed integer
    SmallInteger,

    /// 4-byte signed integer
    Integer,

    /// 8-byte signed integer
    BigInteger,

    /// Single precision floating point
    Float,

    /// Double precision floating point
    Double,

    /// Fixed-point decimal with optional precision and scale
    Numeric(Option<(u32, u32)>),

    /// Fixed length text
    Char(u64),

    /// Variable length text with an optional maximum length
    VarChar(Option<u64>),

    /// Unconstrained text, with an optional length hint
    Text(Option<u64>),

    /// Binary with an optional length
    Binary(Option<u64>),

    /// Unconstrained binary
    LargeBinary,

    /// A civil date
    Date,

    /// A civil "wall clock" time
    Time,

    /// A civil datetime without time zone
    DateTime,

    /// An instant in time (time zone aware)
    Timestamp,

    /// A duration
    Interval,

    /// 128-bit universally unique identifier
    Uuid,

    /// Structured or opaque JSON document
    Json,

    /// Backend specific type with no built-in mapping (`HSTORE`, `TSVECTOR`, ...)
    Custom(String),
}

/// Discriminant of the [`Scalar`] kinds that have a built-in mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    SmallInteger,
    Integer,
    BigInteger,
    Float,
    Double,
    Numeric,
    Char,
    VarChar,
    Text,
    Binary,
    LargeBinary,
    Date,
    Time,
    DateTime,
    Timestamp,
    Interval,
    Uuid,
    Json,
}

/// A type decorator: a user-defined type layered over an implementation
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorated {
    /// Name of the decorator, used in diagnostics
    pub name: String,

    /// Semantic type declared directly by the decorator. When set it takes
    /// priority over the implementation type.
    pub ty: Option<stmt::Type>,

    /// The wrapped implementation type
    pub impl_ty: Option<Box<Type>>,
}

/// An enumeration storage type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEnum {
    /// Declared name of the enumeration
    pub name: String,

    /// Labels in declaration order
    pub labels: Vec<String>,

    /// The backing representation, if the backend stores enumerations as
    /// another type
    pub repr: Option<Box<Type>>,
}

impl Type {
    pub fn boolean() -> Self {
        Scalar::Boolean.into()
    }

    pub fn integer() -> Self {
        Scalar::Integer.into()
    }

    pub fn big_integer() -> Self {
        Scalar::BigInteger.into()
    }

    pub fn varchar(len: u64) -> Self {
        Scalar::VarChar(Some(len)).into()
    }

    pub fn text() -> Self {
        Scalar::Text(None).into()
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Scalar::Custom(name.into()).into()
    }

    pub fn array(item: impl Into<Type>) -> Self {
        Self::Array(Box::new(item.into()))
    }

    pub fn enumeration<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(TypeEnum {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            repr: None,
        })
    }

    /// A decorator over `impl_ty` without a direct type marker.
    pub fn decorated(name: impl Into<String>, impl_ty: impl Into<Type>) -> Self {
        Self::Decorated(Decorated {
            name: name.into(),
            ty: None,
            impl_ty: Some(Box::new(impl_ty.into())),
        })
    }

    /// Declared storage length of the type.
    ///
    /// Decorators report the length of their implementation type.
    /// Enumerations never report a length, even when backed by a sized
    /// string representation.
    pub fn length(&self) -> Option<u64> {
        match self {
            Self::Scalar(scalar) => scalar.length(),
            Self::Decorated(decorated) => decorated.impl_ty.as_ref().and_then(|ty| ty.length()),
            Self::Array(_) | Self::Enum(_) => None,
        }
    }
}

impl Scalar {
    /// Returns the kind of the scalar, or `None` for custom types.
    pub fn kind(&self) -> Option<ScalarKind> {
        use ScalarKind as K;

        Some(match self {
            Self::Boolean => K::Boolean,
            Self::SmallInteger => K::SmallInteger,
            Self::Integer => K::Integer,
            Self::BigInteger => K::BigInteger,
            Self::Float => K::Float,
            Self::Double => K::Double,
            Self::Numeric(_) => K::Numeric,
            Self::Char(_) => K::Char,
            Self::VarChar(_) => K::VarChar,
            Self::Text(_) => K::Text,
            Self::Binary(_) => K::Binary,
            Self::LargeBinary => K::LargeBinary,
            Self::Date => K::Date,
            Self::Time => K::Time,
            Self::DateTime => K::DateTime,
            Self::Timestamp => K::Timestamp,
            Self::Interval => K::Interval,
            Self::Uuid => K::Uuid,
            Self::Json => K::Json,
            Self::Custom(_) => return None,
        })
    }

    pub fn length(&self) -> Option<u64> {
        match self {
            Self::Char(len) => Some(*len),
            Self::VarChar(len) | Self::Text(len) | Self::Binary(len) => *len,
            _ => None,
        }
    }
}

impl ScalarKind {
    /// Every kind with a built-in mapping.
    pub const ALL: [ScalarKind; 19] = [
        Self::Boolean,
        Self::SmallInteger,
        Self::Integer,
        Self::BigInteger,
        Self::Float,
        Self::Double,
        Self::Numeric,
        Self::Char,
        Self::VarChar,
        Self::Text,
        Self::Binary,
        Self::LargeBinary,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Timestamp,
        Self::Interval,
        Self::Uuid,
        Self::Json,
    ];
}

impl TypeEnum {
    /// The label type of the enumeration, as seen by the model.
    pub fn to_stmt(&self) -> stmt::TypeEnum {
        stmt::TypeEnum::new(&self.name, &self.labels)
    }
}

impl From<Scalar> for Type {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Decorated> for Type {
    fn from(value: Decorated) -> Self {
        Self::Decorated(value)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::Decorated(decorated) => f.write_str(&decorated.name),
            Self::Array(item) => write!(f, "{item}[]"),
            Self::Enum(ty) => write!(f, "ENUM({})", ty.name),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::SmallInteger => f.write_str("SMALLINT"),
            Self::Integer => f.write_str("INTEGER"),
            Self::BigInteger => f.write_str("BIGINT"),
            Self::Float => f.write_str("FLOAT"),
            Self::Double => f.write_str("DOUBLE"),
            Self::Numeric(None) => f.write_str("NUMERIC"),
            Self::Numeric(Some((precision, scale))) => write!(f, "NUMERIC({precision}, {scale})"),
            Self::Char(len) => write!(f, "CHAR({len})"),
            Self::VarChar(None) => f.write_str("VARCHAR"),
            Self::VarChar(Some(len)) => write!(f, "VARCHAR({len})"),
            Self::Text(None) => f.write_str("TEXT"),
            Self::Text(Some(len)) => write!(f, "TEXT({len})"),
            Self::Binary(None) => f.write_str("BINARY"),
            Self::Binary(Some(len)) => write!(f, "BINARY({len})"),
            Self::LargeBinary => f.write_str("BLOB"),
            Self::Date => f.write_str("DATE"),
            Self::Time => f.write_str("TIME"),
            Self::DateTime => f.write_str("DATETIME"),
            Self::Timestamp => f.write_str("TIMESTAMP WITH TIME ZONE"),
            Self::Interval => f.write_str("INTERVAL"),
            Self::Uuid => f.write_str("UUID"),
            Self::Json => f.write_str("JSON"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
