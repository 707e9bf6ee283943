use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de::timestamp_from_str;

/// The `"Meta Data"` section of a time-series response.
///
/// Only `3. Last Refreshed` is required; the other entries are informational.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaData {
    #[serde(rename = "1. Information", default)]
    pub information: Option<String>,
    #[serde(rename = "2. Symbol", default)]
    pub symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed", deserialize_with = "timestamp_from_str")]
    pub last_refreshed: NaiveDateTime,
    #[serde(rename = "4. Interval", default)]
    pub interval: Option<String>,
    #[serde(rename = "5. Output Size", default)]
    pub output_size: Option<String>,
    #[serde(rename = "6. Time Zone", default)]
    pub time_zone: Option<String>,
}

/// A decoded response alongside the raw JSON it was decoded from.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub raw: serde_json::Value,
    pub data: T,
}
