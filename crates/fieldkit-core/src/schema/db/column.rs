use super::Type;
use crate::schema::app::{DefaultFactory, FieldMeta};
use crate::stmt::Value;

/// A table column as declared by the table schema.
///
/// Columns are read, never mutated, while fields are built from them.
#[derive(Debug, Clone)]
pub struct Column {
    /// The logical name of the column. This is the name the generated model
    /// exposes.
    pub name: String,

    /// Name under which the value is stored in the underlying record, if it
    /// differs from `name`.
    pub key: Option<String>,

    /// Native storage type
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// Column-level default
    pub default: Option<ColumnDefault>,

    /// Documentation attached to the column
    pub doc: Option<String>,

    /// Explicit per-column field metadata
    pub meta: FieldMeta,
}

/// A column-level default.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// A fixed value
    Value(Value),

    /// A zero-argument callable producing a fresh value
    Factory(DefaultFactory),

    /// An expression evaluated by the storage layer on insert
    Expr(String),
}

impl Column {
    /// Creates a nullable column with no default.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            key: None,
            ty: ty.into(),
            nullable: true,
            primary_key: false,
            default: None,
            doc: None,
            meta: FieldMeta::default(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn not_null(self) -> Self {
        self.nullable(false)
    }

    /// Marks the column as part of the primary key. Primary key columns are
    /// never nullable.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(ColumnDefault::Value(value.into()));
        self
    }

    pub fn default_factory(mut self, f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default = Some(ColumnDefault::Factory(DefaultFactory::new(f)));
        self
    }

    pub fn server_default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(ColumnDefault::Expr(expr.into()));
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn meta(mut self, meta: FieldMeta) -> Self {
        self.meta = meta;
        self
    }

    /// The name used to read and write the value in the underlying record.
    pub fn storage_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }
}
