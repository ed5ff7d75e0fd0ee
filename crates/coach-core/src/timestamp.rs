//! Lenient timestamp (de)serialization for stored records.
//!
//! Records written by earlier versions of the app can carry timestamps as
//! ISO strings, epoch milliseconds, or garbage. Anything that does not parse
//! as a valid date normalizes to "now" instead of failing the whole read.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Serialize as an ISO 8601 string with millisecond precision.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Deserialize from whatever the stored document carries, normalizing
/// invalid or missing values to the current time.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(normalize(value))
}

/// Normalize a raw JSON value into a valid timestamp.
pub fn normalize(value: Option<Value>) -> DateTime<Utc> {
    match value {
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(&text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .unwrap_or_else(Utc::now),
        _ => Utc::now(),
    }
}

/// Default used when the field is absent entirely.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_iso_string() {
        let value = Some(Value::String("2024-03-01T12:30:00.000Z".to_string()));
        let parsed = normalize(value);
        assert_eq!(parsed.to_rfc3339_opts(SecondsFormat::Millis, true), "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_normalize_epoch_millis() {
        let value = Some(Value::Number(serde_json::Number::from(1_700_000_000_000i64)));
        let parsed = normalize(value);
        assert_eq!(parsed.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_normalize_garbage_defaults_to_now() {
        let before = Utc::now();
        let parsed = normalize(Some(Value::String("not a date".to_string())));
        let after = Utc::now();
        assert!(parsed >= before && parsed <= after);
    }

    #[test]
    fn test_normalize_missing_defaults_to_now() {
        let before = Utc::now();
        let parsed = normalize(None);
        let after = Utc::now();
        assert!(parsed >= before && parsed <= after);
    }
}
