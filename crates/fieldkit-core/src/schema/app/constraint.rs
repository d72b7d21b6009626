use super::Violation;
use crate::stmt::Value;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Number;
use std::cmp::Ordering;

/// Validation constraints and schema annotations of a field.
///
/// Unset constraints are `None`. Constraints are declarations; they are
/// only enforced when model data is validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    /// Alternative input key
    pub alias: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    pub ge: Option<Number>,

    pub gt: Option<Number>,

    pub le: Option<Number>,

    pub lt: Option<Number>,

    pub multiple_of: Option<Number>,

    pub min_length: Option<u64>,

    pub max_length: Option<u64>,

    pub min_items: Option<usize>,

    pub max_items: Option<usize>,

    /// Pattern a string value must match from its first character
    pub regex: Option<String>,

    /// Whether the field may be reassigned once the model instance exists.
    /// Unset means mutable.
    pub allow_mutation: Option<bool>,

    /// The value must equal the field default
    pub constant: bool,

    pub example: Option<Value>,
}

/// A numeric bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Ge,
    Gt,
    Le,
    Lt,
}

impl Constraints {
    pub fn is_mutable(&self) -> bool {
        self.allow_mutation.unwrap_or(true)
    }

    /// The numeric bounds that are set, in `ge`, `gt`, `le`, `lt` order.
    pub fn bounds(&self) -> impl Iterator<Item = (Bound, &Number)> {
        [
            (Bound::Ge, &self.ge),
            (Bound::Gt, &self.gt),
            (Bound::Le, &self.le),
            (Bound::Lt, &self.lt),
        ]
        .into_iter()
        .filter_map(|(bound, limit)| limit.as_ref().map(|limit| (bound, limit)))
    }

    /// Checks the bound, multiple, length and item constraints against a
    /// value already converted to the field type.
    ///
    /// `regex` and `constant` need model context (a compiled pattern, the
    /// field default) and are checked by the model.
    pub fn check(&self, value: &Value) -> Result<(), Violation> {
        match value {
            Value::Null => Ok(()),
            Value::I64(_) | Value::F64(_) | Value::Decimal(_) => self.check_number(value),
            Value::String(s) => self.check_length(s.chars().count()),
            Value::Bytes(bytes) => self.check_length(bytes.len()),
            Value::List(items) => self.check_items(items.len()),
            _ => Ok(()),
        }
    }

    fn check_number(&self, value: &Value) -> Result<(), Violation> {
        for (bound, limit) in self.bounds() {
            let holds = compare(value, limit).is_some_and(|ord| bound.holds(ord));

            if !holds {
                return Err(Violation::Bound {
                    bound,
                    limit: limit.clone(),
                });
            }
        }

        if let Some(step) = &self.multiple_of {
            if !is_multiple_of(value, step) {
                return Err(Violation::MultipleOf(step.clone()));
            }
        }

        Ok(())
    }

    fn check_length(&self, len: usize) -> Result<(), Violation> {
        let too_short = self.min_length.is_some_and(|min| (len as u64) < min);
        let too_long = self.max_length.is_some_and(|max| (len as u64) > max);

        if too_short || too_long {
            return Err(Violation::Length {
                len,
                min: self.min_length,
                max: self.max_length,
            });
        }

        Ok(())
    }

    fn check_items(&self, len: usize) -> Result<(), Violation> {
        let too_few = self.min_items.is_some_and(|min| len < min);
        let too_many = self.max_items.is_some_and(|max| len > max);

        if too_few || too_many {
            return Err(Violation::Items {
                len,
                min: self.min_items,
                max: self.max_items,
            });
        }

        Ok(())
    }
}

impl Bound {
    /// The JSON Schema keyword of the bound.
    pub fn schema_key(self) -> &'static str {
        match self {
            Self::Ge => "minimum",
            Self::Gt => "exclusiveMinimum",
            Self::Le => "maximum",
            Self::Lt => "exclusiveMaximum",
        }
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            Self::Ge => "greater than or equal to",
            Self::Gt => "greater than",
            Self::Le => "less than or equal to",
            Self::Lt => "less than",
        }
    }

    fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Ge => ord.is_ge(),
            Self::Gt => ord.is_gt(),
            Self::Le => ord.is_le(),
            Self::Lt => ord.is_lt(),
        }
    }
}

fn compare(value: &Value, limit: &Number) -> Option<Ordering> {
    match value {
        Value::I64(v) => match limit.as_i64() {
            Some(limit) => Some(v.cmp(&limit)),
            None => (*v as f64).partial_cmp(&limit.as_f64()?),
        },
        Value::Decimal(v) => {
            let limit = match limit.as_i64() {
                Some(limit) => Decimal::from(limit),
                None => Decimal::from_f64(limit.as_f64()?)?,
            };
            Some(v.cmp(&limit))
        }
        _ => value.as_f64()?.partial_cmp(&limit.as_f64()?),
    }
}

fn is_multiple_of(value: &Value, step: &Number) -> bool {
    if let (Value::I64(v), Some(step)) = (value, step.as_i64()) {
        return step != 0 && v.checked_rem(step).map_or(true, |rem| rem == 0);
    }

    let (Some(v), Some(step)) = (value.as_f64(), step.as_f64()) else {
        return false;
    };

    // Float division leaves a remainder close to either 0 or 1 for exact
    // multiples
    let rem = (v / step) % 1.0;
    rem.abs() <= f64::EPSILON || (rem.abs() - 1.0).abs() <= f64::EPSILON
}
