//! Table-side and model-side schema descriptions.
//!
//! [`db`] describes the relational side: tables, columns and their native
//! storage types. [`app`] describes the model side: per-column metadata
//! overrides and the field descriptors built from them.

pub mod app;
pub mod db;
