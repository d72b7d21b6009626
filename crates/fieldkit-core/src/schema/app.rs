//! Model-side schema

mod constraint;
pub use constraint::{Bound, Constraints};

mod factory;
pub use factory::DefaultFactory;

mod field;
pub use field::{FieldDefault, FieldInfo};

mod meta;
pub use meta::FieldMeta;

mod violation;
pub use violation::Violation;
