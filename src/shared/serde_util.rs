//! Custom serde helpers for subgraph wire formats.

/// Deserializes a Unix-seconds timestamp into `DateTime<Utc>`.
///
/// Subgraphs encode `BigInt` fields as JSON strings (`"1700000000"`); plain numbers are
/// accepted as well.
pub mod timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = match Raw::deserialize(deserializer)? {
            Raw::Num(n) => n,
            Raw::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid timestamp: {}", s)))?,
        };
        super::secs_to_datetime(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs)))
    }
}

/// Seconds since the epoch → `DateTime<Utc>` (seconds scaled to milliseconds).
pub fn secs_to_datetime(secs: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    secs.checked_mul(1000)
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
}
