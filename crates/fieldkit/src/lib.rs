//! Translate relational table schemas into validated, introspectable data
//! models.
//!
//! A [`db::Table`] is translated column by column:
//!
//! 1. [`resolve`] maps the column's native type to a semantic [`stmt::Type`].
//! 2. [`field`] merges the column's nullability, default, length and doc
//!    string with its explicit [`app::FieldMeta`] into an [`app::FieldInfo`].
//! 3. [`fields`] assembles the ordered [`FieldSet`] of a table, with
//!    include/exclude filtering and an optional transform.
//! 4. [`model`] builds a [`Model`] from a field set: a schema artifact that
//!    validates keyword data and produces a JSON Schema description.
//!
//! ```
//! use fieldkit::{db, model_from, stmt::Value};
//!
//! let table = db::Table::new("Person")
//!     .column(db::Column::new("id", db::Type::integer()).primary_key())
//!     .column(db::Column::new("name", db::Type::varchar(128)).not_null())
//!     .column(db::Column::new("age", db::Type::integer()).not_null().default(0));
//!
//! let person = model_from(&table).unwrap();
//! let instance = person
//!     .construct([("id", Value::from(1)), ("name", Value::from("Someone"))])
//!     .unwrap();
//!
//! assert_eq!(instance.get("age"), Some(&Value::I64(0)));
//! ```

pub use fieldkit_core as core;
pub use fieldkit_core::schema::{app, db};
pub use fieldkit_core::{err, stmt, Error, Result};

pub mod field;

pub mod fields;
pub use fields::{fields_from, Assemble, FieldSet};

pub mod model;
pub use model::{model_from, Extra, Instance, Model, ModelConfig, ModelFactory};

pub mod resolve;

pub mod transform;
