//! Codec for the API's timestamp format.
//!
//! The API sends local event times as `YYYY-MM-DDTHH:MM:SS`, sometimes with
//! fractional seconds and sometimes with a trailing `Z` (plus whatever
//! follows it). The zone marker carries no meaning for these values, so it
//! is dropped and the result is a naive timestamp.

use crate::error::AppError;
use chrono::NaiveDateTime;

const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses an API timestamp, discarding a `Z` marker and anything after it.
///
/// # Example
/// ```
/// use ftc_events::data_fetcher::models::datetime::{format_api_datetime, parse_api_datetime};
///
/// let with_zone = parse_api_datetime("2024-04-12T10:00:00Z").unwrap();
/// let without = parse_api_datetime("2024-04-12T10:00:00").unwrap();
/// assert_eq!(with_zone, without);
/// assert_eq!(format_api_datetime(&with_zone), "2024-04-12T10:00:00");
/// ```
pub fn parse_api_datetime(value: &str) -> Result<NaiveDateTime, AppError> {
    let trimmed = value.trim();
    let timestamp = trimmed.split_once('Z').map_or(trimmed, |(head, _)| head);

    NaiveDateTime::parse_from_str(timestamp, PARSE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("'{value}' is not a valid API timestamp: {e}"))
    })
}

/// Formats a timestamp the way the API writes it, without fractional
/// seconds or zone marker.
pub fn format_api_datetime(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// Serde adapter for required timestamp fields.
pub mod api_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_api_datetime(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_datetime(&raw).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional timestamp fields. `null`, a missing field and
/// an empty string all decode to `None`.
pub mod option_api_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&super::format_api_datetime(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_api_datetime(&raw)
                .map(Some)
                .map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}
