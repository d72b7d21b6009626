use crate::{db::ScalarKind, stmt::Type};

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in scalar mappings. Initialized on first use and never mutated.
static REGISTRY: Lazy<HashMap<ScalarKind, Type>> = Lazy::new(|| {
    use ScalarKind::*;

    HashMap::from([
        (Boolean, Type::Bool),
        (SmallInteger, Type::I16),
        (Integer, Type::I32),
        (BigInteger, Type::I64),
        (Float, Type::F64),
        (Double, Type::F64),
        (Numeric, Type::Decimal),
        (Char, Type::String),
        (VarChar, Type::String),
        (Text, Type::String),
        (Binary, Type::Bytes),
        (LargeBinary, Type::Bytes),
        (Date, Type::Date),
        (Time, Type::Time),
        (DateTime, Type::DateTime),
        (Timestamp, Type::Timestamp),
        (Interval, Type::Interval),
        (Uuid, Type::Uuid),
        (Json, Type::Json),
    ])
});

/// Returns the semantic type of a scalar kind.
pub fn lookup(kind: ScalarKind) -> Option<&'static Type> {
    REGISTRY.get(&kind)
}
