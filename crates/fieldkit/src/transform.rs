//! Built-in whole-field policies for [`Assemble::transform`](crate::Assemble::transform).

use crate::{
    app::{FieldDefault, FieldInfo},
    stmt::{Type, Value},
};

/// Makes the field optional with the no-value marker as its default.
///
/// Used for partial-update schemas, where every field may be left out. A
/// constant field would only accept the no-value marker afterwards, so the
/// `const` flag is cleared as well.
pub fn nonify(ty: Type, mut info: FieldInfo) -> (Type, FieldInfo) {
    info.optional = true;
    info.default = FieldDefault::Value(Value::Null);
    info.constraints.constant = false;

    (Type::optional(ty), info)
}
