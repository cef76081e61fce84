//! Timestamp - UTC clock and on-disk timestamp format
//!
//! Every persisted timestamp comes from [`current_time`] and is written as
//! RFC 3339 with a `Z` suffix. Naive ISO-8601 values (no offset) are read
//! back as UTC so that stores written by older service versions still load.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de::Error, Deserialize, Deserializer, Serializer};

/// Current UTC time
pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(Error::custom)
}

/// Parse an RFC 3339 timestamp, falling back to naive ISO-8601 as UTC
pub fn parse(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp '{}': {}", s, e))
}
