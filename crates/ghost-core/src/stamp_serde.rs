//! Lenient timestamp deserialization for task stamps.
//!
//! Boards saved by the browser front end carry epoch milliseconds; boards
//! saved by `kghost` carry RFC 3339 strings. Both load as `DateTime<Utc>`,
//! and serialization always emits RFC 3339.
//!
//! ```ignore
//! #[serde(default, deserialize_with = "crate::stamp_serde::deserialize_option")]
//! pub started_at: Option<DateTime<Utc>>,
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStamp {
    Millis(i64),
    Text(DateTime<Utc>),
}

/// Deserialize `Option<DateTime<Utc>>` from RFC 3339 text, epoch millis, or null.
pub fn deserialize_option<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<RawStamp>::deserialize(d)? {
        None => Ok(None),
        Some(RawStamp::Text(dt)) => Ok(Some(dt)),
        Some(RawStamp::Millis(ms)) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("Invalid timestamp milliseconds")),
    }
}
