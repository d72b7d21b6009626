use crate::{app::FieldMeta, db::Column};

/// A place a field description can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionSource {
    /// `description` in the field metadata. An explicit no-value suppresses
    /// the doc string.
    Meta,

    /// The column's doc string
    ColumnDoc,
}

/// Description sources in priority order.
pub const DESCRIPTION_PRIORITY: &[DescriptionSource] =
    &[DescriptionSource::Meta, DescriptionSource::ColumnDoc];

impl DescriptionSource {
    /// Returns `Some` when this source decides the description, even if it
    /// decides there is none.
    pub fn provide(self, column: &Column, meta: &FieldMeta) -> Option<Option<String>> {
        match self {
            Self::Meta => meta.description.clone(),
            Self::ColumnDoc => column.doc.clone().map(Some),
        }
    }
}

pub(super) fn resolve(column: &Column, meta: &FieldMeta) -> Option<String> {
    DESCRIPTION_PRIORITY
        .iter()
        .find_map(|source| source.provide(column, meta))
        .flatten()
}
