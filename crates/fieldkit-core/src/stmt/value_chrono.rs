use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::stmt::Value;

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident, $lit:literal) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = crate::Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    value => Err(crate::Error::type_conversion(value, $lit)),
                }
            }
        }
    };
}

impl_chrono_conversions!(DateTime<Utc>, Timestamp, "DateTime<Utc>");
impl_chrono_conversions!(NaiveDateTime, DateTime, "NaiveDateTime");
impl_chrono_conversions!(NaiveDate, Date, "NaiveDate");
impl_chrono_conversions!(NaiveTime, Time, "NaiveTime");
impl_chrono_conversions!(TimeDelta, Interval, "TimeDelta");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrono_values_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(NaiveDate::try_from(Value::from(date)).unwrap(), date);

        let delta = TimeDelta::seconds(90);
        assert_eq!(TimeDelta::try_from(Value::from(delta)).unwrap(), delta);
    }

    #[test]
    fn wrong_variant_is_a_conversion_error() {
        let err = NaiveTime::try_from(Value::from("12:00")).unwrap_err();

        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert String to NaiveTime");
    }

    #[test]
    fn optional_values() {
        let now = Utc::now();

        assert_eq!(Value::from(Some(now)), Value::Timestamp(now));
        assert_eq!(Value::from(None::<NaiveDateTime>), Value::Null);
    }
}
