mod column;
pub use column::{Column, ColumnDefault};

mod table;
pub use table::Table;

mod ty;
pub use ty::{Decorated, Scalar, ScalarKind, Type, TypeEnum};
