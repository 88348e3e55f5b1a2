use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};
use std::fmt;

/*----- */
// Flexible numerics
/*----- */
// The API serves numeric fields as either JSON numbers or numeric strings,
// depending on the endpoint. Anything that does not resolve to a finite
// value is a deserialization error, never a defaulted zero.
#[derive(Debug, Clone, Copy)]
pub struct FlexibleF64(pub f64);

impl<'de> Deserialize<'de> for FlexibleF64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlexibleF64Visitor;

        impl<'de> Visitor<'de> for FlexibleF64Visitor {
            type Value = FlexibleF64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a finite number or numeric string")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.is_finite() {
                    Ok(FlexibleF64(value))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(value), &self))
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleF64(value as f64))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleF64(value as f64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let parsed = value.parse::<f64>().map_err(E::custom)?;
                if parsed.is_finite() {
                    Ok(FlexibleF64(parsed))
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(FlexibleF64Visitor)
    }
}

// Deserialize a string-or-number field as a finite `f64`.
pub fn de_flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleF64::deserialize(deserializer).map(|value| value.0)
}

// Deserialize an identifier the API serves either as a string or as a bare
// integer, keeping its string form.
pub fn de_flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleStringVisitor;

    impl<'de> Visitor<'de> for FlexibleStringVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer identifier")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_owned())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(FlexibleStringVisitor)
}

/*----- */
// Timestamps
/*----- */
pub fn datetime_utc_from_epoch_duration(
    duration: std::time::Duration,
) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from(std::time::UNIX_EPOCH + duration)
}

// Deserialize a `u64` seconds-since-epoch value as `DateTime<Utc>`.
pub fn de_u64_epoch_s_as_datetime_utc<'de, D>(
    deserializer: D,
) -> Result<chrono::DateTime<chrono::Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    serde::de::Deserialize::deserialize(deserializer).map(|epoch_s| {
        datetime_utc_from_epoch_duration(std::time::Duration::from_secs(epoch_s))
    })
}
