use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use super::de::{f64_from_str, opt_f64_from_str, opt_u64_from_str, parse_timestamp};
use super::meta::MetaData;

const META_DATA_KEY: &str = "Meta Data";
const TIME_SERIES_PREFIX: &str = "Time Series";

/// One intraday bar. Only high, low and close are required of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub timestamp: NaiveDateTime,
    pub open: Option<f64>,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

impl Quote {
    /// Calendar date the bar belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[derive(Deserialize)]
struct QuoteFields {
    #[serde(rename = "1. open", default, deserialize_with = "opt_f64_from_str")]
    open: Option<f64>,
    #[serde(rename = "2. high", deserialize_with = "f64_from_str")]
    high: f64,
    #[serde(rename = "3. low", deserialize_with = "f64_from_str")]
    low: f64,
    #[serde(rename = "4. close", deserialize_with = "f64_from_str")]
    close: f64,
    #[serde(rename = "5. volume", default, deserialize_with = "opt_u64_from_str")]
    volume: Option<u64>,
}

/// Quotes in the order the feed listed them (newest first for Alpha Vantage).
///
/// Every record is validated while the payload is decoded, not only the ones
/// a later filter selects. A single unparseable record on any day therefore
/// rejects the whole response as malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries(Vec<Quote>);

impl TimeSeries {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self(quotes)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeSeriesVisitor;

        impl<'de> Visitor<'de> for TimeSeriesVisitor {
            type Value = TimeSeries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of timestamps to quotes")
            }

            // Entries arrive in document order, which is what the feed promises.
            fn visit_map<A>(self, mut map: A) -> Result<TimeSeries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut quotes = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, fields)) = map.next_entry::<String, QuoteFields>()? {
                    let timestamp = parse_timestamp(&key).map_err(|e| {
                        de::Error::custom(format!("invalid timestamp '{}': {}", key, e))
                    })?;
                    quotes.push(Quote {
                        timestamp,
                        open: fields.open,
                        high: fields.high,
                        low: fields.low,
                        close: fields.close,
                        volume: fields.volume,
                    });
                }
                Ok(TimeSeries(quotes))
            }
        }

        deserializer.deserialize_map(TimeSeriesVisitor)
    }
}

/// Body of a `TIME_SERIES_INTRADAY` response.
///
/// The series key embeds the interval (`"Time Series (5min)"`), so it is
/// matched by prefix rather than by a fixed field name.
#[derive(Debug, Clone)]
pub struct IntradayResponse {
    pub meta_data: MetaData,
    pub time_series: TimeSeries,
}

impl IntradayResponse {
    /// The date component of `3. Last Refreshed`.
    pub fn trading_day(&self) -> NaiveDate {
        self.meta_data.last_refreshed.date()
    }
}

impl<'de> Deserialize<'de> for IntradayResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntradayVisitor;

        impl<'de> Visitor<'de> for IntradayVisitor {
            type Value = IntradayResponse;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an intraday time series object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<IntradayResponse, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut meta_data: Option<MetaData> = None;
                let mut time_series: Option<TimeSeries> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == META_DATA_KEY {
                        if meta_data.is_some() {
                            return Err(de::Error::duplicate_field(META_DATA_KEY));
                        }
                        meta_data = Some(map.next_value()?);
                    } else if key.starts_with(TIME_SERIES_PREFIX) {
                        if time_series.is_some() {
                            return Err(de::Error::duplicate_field(TIME_SERIES_PREFIX));
                        }
                        time_series = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let meta_data =
                    meta_data.ok_or_else(|| de::Error::missing_field(META_DATA_KEY))?;
                let time_series =
                    time_series.ok_or_else(|| de::Error::missing_field(TIME_SERIES_PREFIX))?;
                Ok(IntradayResponse {
                    meta_data,
                    time_series,
                })
            }
        }

        deserializer.deserialize_map(IntradayVisitor)
    }
}
