use crate::{
    app::{FieldDefault, FieldMeta},
    db::{Column, ColumnDefault},
    stmt::Value,
};

/// A place a field default can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSource {
    /// `default_factory` in the field metadata
    MetaFactory,

    /// `default` in the field metadata, including an explicit no-value
    MetaValue,

    /// A callable column default
    ColumnFactory,

    /// A fixed, non-null column default
    ColumnValue,

    /// A default produced by the storage layer. The field defaults to the
    /// no-value marker.
    ServerDefault,

    /// Non-nullable column with nothing above: the value must be supplied
    Required,

    /// Falls back to the no-value marker
    NoValue,
}

/// Default sources in priority order. The first source providing a default
/// wins.
pub const DEFAULT_PRIORITY: &[DefaultSource] = &[
    DefaultSource::MetaFactory,
    DefaultSource::MetaValue,
    DefaultSource::ColumnFactory,
    DefaultSource::ColumnValue,
    DefaultSource::ServerDefault,
    DefaultSource::Required,
    DefaultSource::NoValue,
];

impl DefaultSource {
    /// Returns the default this source provides for the column, if any.
    pub fn provide(self, column: &Column, meta: &FieldMeta) -> Option<FieldDefault> {
        match self {
            Self::MetaFactory => meta.default_factory.clone().map(FieldDefault::Factory),
            Self::MetaValue => meta.default.clone().map(FieldDefault::Value),
            Self::ColumnFactory => match &column.default {
                Some(ColumnDefault::Factory(factory)) => Some(FieldDefault::Factory(factory.clone())),
                _ => None,
            },
            Self::ColumnValue => match &column.default {
                Some(ColumnDefault::Value(value)) if !value.is_null() => {
                    Some(FieldDefault::Value(value.clone()))
                }
                _ => None,
            },
            Self::ServerDefault => match &column.default {
                Some(ColumnDefault::Expr(_)) => Some(FieldDefault::Value(Value::Null)),
                _ => None,
            },
            Self::Required => (!column.nullable).then_some(FieldDefault::Required),
            Self::NoValue => Some(FieldDefault::Value(Value::Null)),
        }
    }
}

pub(super) fn resolve(column: &Column, meta: &FieldMeta) -> (DefaultSource, FieldDefault) {
    DEFAULT_PRIORITY
        .iter()
        .find_map(|source| source.provide(column, meta).map(|default| (*source, default)))
        .unwrap_or((DefaultSource::NoValue, FieldDefault::Value(Value::Null)))
}
