use super::Value;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

impl Value {
    /// Encodes the value as JSON.
    ///
    /// Dates and times become ISO 8601 strings, intervals become a number of
    /// seconds and decimals become JSON numbers.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Null => Json::Null,
            Self::Bool(v) => Json::Bool(*v),
            Self::I64(v) => Json::Number((*v).into()),
            Self::F64(v) => Number::from_f64(*v).map_or(Json::Null, Json::Number),
            Self::Decimal(v) => v
                .to_f64()
                .and_then(Number::from_f64)
                .map_or_else(|| Json::String(v.to_string()), Json::Number),
            Self::String(v) | Self::Enum(v) => Json::String(v.clone()),
            Self::Bytes(v) => Json::String(String::from_utf8_lossy(v).into_owned()),
            Self::Date(v) => Json::String(v.to_string()),
            Self::Time(v) => Json::String(v.to_string()),
            Self::DateTime(v) => Json::String(v.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            Self::Timestamp(v) => Json::String(v.to_rfc3339()),
            Self::Interval(v) => {
                let seconds = match v.num_microseconds() {
                    Some(micros) => micros as f64 / 1_000_000.0,
                    None => v.num_seconds() as f64,
                };
                Number::from_f64(seconds).map_or(Json::Null, Json::Number)
            }
            Self::Uuid(v) => Json::String(v.to_string()),
            Self::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Self::Json(v) => v.clone(),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match src {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Self::I64(v),
                None => Self::F64(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            object @ Json::Object(_) => Self::Json(object),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(src: &serde_json::Value) -> Self {
        Self::from(src.clone())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
