//! Field-set assembly from a table definition.

use crate::{app::FieldInfo, db, field, stmt, Error, Result};

use indexmap::IndexMap;
use std::{collections::HashSet, fmt, sync::Arc};

/// Ordered mapping of logical field name to semantic type and field
/// descriptor, in table declaration order.
pub type FieldSet = IndexMap<String, (stmt::Type, FieldInfo)>;

/// A whole-field policy applied to every built field.
pub type Transform = dyn Fn(stmt::Type, FieldInfo) -> (stmt::Type, FieldInfo) + Send + Sync;

/// Options for assembling the field set of a table.
///
/// ```
/// use fieldkit::{db, Assemble};
///
/// let table = db::Table::new("Test")
///     .column(db::Column::new("id", db::Type::integer()).primary_key())
///     .column(db::Column::new("number", db::Type::integer()));
///
/// let fields = Assemble::new().exclude(["number"]).run(&table).unwrap();
/// assert_eq!(fields.keys().collect::<Vec<_>>(), ["id"]);
/// ```
#[derive(Clone, Default)]
pub struct Assemble {
    include: Option<HashSet<String>>,
    exclude: Option<HashSet<String>>,
    transform: Option<Arc<Transform>>,
}

/// Assembles every column of `table` into a field set.
pub fn fields_from(table: &db::Table) -> Result<FieldSet> {
    Assemble::new().run(table)
}

impl Assemble {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the named columns participate. Mutually exclusive with
    /// [`exclude`](Self::exclude).
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include
            .get_or_insert_with(HashSet::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// All columns except the named ones participate. Mutually exclusive
    /// with [`include`](Self::include).
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude
            .get_or_insert_with(HashSet::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Applies `f` to every field after it is built.
    pub fn transform(
        mut self,
        f: impl Fn(stmt::Type, FieldInfo) -> (stmt::Type, FieldInfo) + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(f));
        self
    }

    /// Builds the field set of `table`.
    pub fn run(&self, table: &db::Table) -> Result<FieldSet> {
        if self.include.is_some() && self.exclude.is_some() {
            return Err(Error::conflict(
                "`exclude` and `include` are mutually exclusive",
            ));
        }

        let mut fields = FieldSet::with_capacity(table.columns.len());

        for column in table.columns.iter().filter(|column| self.participates(column)) {
            if fields.contains_key(&column.name) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` is declared more than once in table `{}`",
                    column.name, table.name
                )));
            }

            let (ty, info) = field::make_field(column)?;

            let (ty, info) = match &self.transform {
                Some(transform) => transform(ty, info),
                None => (ty, info),
            };

            fields.insert(column.name.clone(), (ty, info));
        }

        tracing::debug!(table = %table.name, fields = fields.len(), "assembled field set");

        Ok(fields)
    }

    fn participates(&self, column: &db::Column) -> bool {
        if let Some(include) = &self.include {
            return include.contains(&column.name);
        }

        if let Some(exclude) = &self.exclude {
            return !exclude.contains(&column.name);
        }

        true
    }
}

impl fmt::Debug for Assemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assemble")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("transform", &self.transform.as_ref().map(|_| ".."))
            .finish()
    }
}
