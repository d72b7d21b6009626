use super::{Type, Value};
use crate::Result;

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc,
};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::str::FromStr;

impl Type {
    /// Coerces `value` into this type.
    ///
    /// `Null` is passed through unchanged; whether a missing value is allowed
    /// is decided by the caller. Coercions are lenient: integers widen to
    /// floats and decimals, numeric strings parse as numbers, ISO 8601 strings
    /// parse as dates and times and lists are cast item by item.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match self {
            Self::Option(inner) => return inner.cast(value),
            Self::Bool => match value {
                Value::Bool(_) => value,
                Value::I64(0) => Value::Bool(false),
                Value::I64(1) => Value::Bool(true),
                Value::String(ref s) => match s.to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" | "on" => Value::Bool(true),
                    "false" | "0" | "no" | "off" => Value::Bool(false),
                    _ => return Err(self.conversion(value)),
                },
                value => return Err(self.conversion(value)),
            },
            Self::I16 => self.cast_int(value, i16::MIN.into(), i16::MAX.into())?,
            Self::I32 => self.cast_int(value, i32::MIN.into(), i32::MAX.into())?,
            Self::I64 => self.cast_int(value, i64::MIN, i64::MAX)?,
            Self::F64 => match value {
                Value::F64(_) => value,
                Value::I64(v) => Value::F64(v as f64),
                Value::Decimal(v) => match v.to_f64() {
                    Some(v) => Value::F64(v),
                    None => return Err(self.conversion(value)),
                },
                Value::String(ref s) => match s.trim().parse::<f64>() {
                    Ok(v) => Value::F64(v),
                    Err(_) => return Err(self.conversion(value)),
                },
                value => return Err(self.conversion(value)),
            },
            Self::Decimal => match value {
                Value::Decimal(_) => value,
                Value::I64(v) => Value::Decimal(Decimal::from(v)),
                Value::F64(v) => match Decimal::from_f64(v) {
                    Some(v) => Value::Decimal(v),
                    None => return Err(self.conversion(value)),
                },
                Value::String(ref s) => Value::Decimal(Decimal::from_str(s.trim())?),
                value => return Err(self.conversion(value)),
            },
            Self::String => match value {
                Value::String(_) => value,
                Value::Enum(label) => Value::String(label),
                value => return Err(self.conversion(value)),
            },
            Self::Bytes => match value {
                Value::Bytes(_) => value,
                Value::String(s) => Value::Bytes(s.into_bytes()),
                value => return Err(self.conversion(value)),
            },
            Self::Date => match value {
                Value::Date(_) => value,
                Value::DateTime(v) => Value::Date(v.date()),
                Value::String(ref s) => Value::Date(NaiveDate::from_str(s)?),
                value => return Err(self.conversion(value)),
            },
            Self::Time => match value {
                Value::Time(_) => value,
                Value::String(ref s) => Value::Time(NaiveTime::from_str(s)?),
                value => return Err(self.conversion(value)),
            },
            Self::DateTime => match value {
                Value::DateTime(_) => value,
                Value::Date(v) => Value::DateTime(v.and_time(NaiveTime::MIN)),
                Value::Timestamp(v) => Value::DateTime(v.naive_utc()),
                Value::String(ref s) => Value::DateTime(parse_naive_datetime(s)?),
                value => return Err(self.conversion(value)),
            },
            Self::Timestamp => match value {
                Value::Timestamp(_) => value,
                Value::DateTime(v) => Value::Timestamp(v.and_utc()),
                Value::I64(secs) => match DateTime::<Utc>::from_timestamp(secs, 0) {
                    Some(v) => Value::Timestamp(v),
                    None => return Err(self.conversion(value)),
                },
                Value::String(ref s) => match DateTime::parse_from_rfc3339(s) {
                    Ok(v) => Value::Timestamp(v.with_timezone(&Utc)),
                    // A civil date time without offset is taken as UTC
                    Err(_) => Value::Timestamp(parse_naive_datetime(s)?.and_utc()),
                },
                value => return Err(self.conversion(value)),
            },
            Self::Interval => match value {
                Value::Interval(_) => value,
                Value::I64(secs) => match TimeDelta::try_seconds(secs) {
                    Some(v) => Value::Interval(v),
                    None => return Err(self.conversion(value)),
                },
                Value::F64(secs)
                    if (i64::MIN as f64..i64::MAX as f64).contains(&(secs * 1_000_000.0).round()) =>
                {
                    Value::Interval(TimeDelta::microseconds((secs * 1_000_000.0).round() as i64))
                }
                value => return Err(self.conversion(value)),
            },
            Self::Uuid => match value {
                Value::Uuid(_) => value,
                Value::String(ref s) => Value::Uuid(uuid::Uuid::parse_str(s)?),
                Value::Bytes(ref bytes) => Value::Uuid(uuid::Uuid::from_slice(bytes)?),
                value => return Err(self.conversion(value)),
            },
            Self::Json => match value {
                Value::Json(serde_json::Value::Object(_)) => value,
                value => return Err(self.conversion(value)),
            },
            Self::List(item) => match value {
                Value::List(items) => {
                    let mut cast = Vec::with_capacity(items.len());
                    for value in items {
                        if value.is_null() && !item.is_option() {
                            return Err(item.conversion(value));
                        }
                        cast.push(item.cast(value)?);
                    }
                    Value::List(cast)
                }
                value => return Err(self.conversion(value)),
            },
            Self::Enum(ty) => match value {
                Value::String(label) | Value::Enum(label) if ty.contains(&label) => {
                    Value::Enum(label)
                }
                value => return Err(self.conversion(value)),
            },
        })
    }

    fn cast_int(&self, value: Value, min: i64, max: i64) -> Result<Value> {
        let v = match value {
            Value::I64(v) => Some(v),
            // `as` saturates, so out of range floats are rejected first
            Value::F64(v) if v.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&v) => {
                Some(v as i64)
            }
            Value::Decimal(v) if v.fract().is_zero() => v.to_i64(),
            Value::String(ref s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        match v {
            Some(v) if (min..=max).contains(&v) => Ok(Value::I64(v)),
            _ => Err(self.conversion(value)),
        }
    }

    fn conversion(&self, value: Value) -> crate::Error {
        crate::Error::type_conversion(value, self.to_string())
    }
}

fn parse_naive_datetime(s: &str) -> Result<NaiveDateTime> {
    match NaiveDateTime::from_str(s) {
        Ok(v) => Ok(v),
        Err(_) => Ok(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")?),
    }
}
