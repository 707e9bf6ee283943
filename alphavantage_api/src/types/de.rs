//! Deserialization helpers for Alpha Vantage's string-encoded fields.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` as midnight.
pub(crate) fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).or_else(|_| {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
    })
}

pub(crate) fn timestamp_from_str<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s)
        .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", s, e)))
}

fn parse_f64<E: de::Error>(s: &str) -> Result<f64, E> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(E::custom(format!("non-finite number '{}'", s))),
        Err(e) => Err(E::custom(format!("invalid number '{}': {}", s, e))),
    }
}

fn parse_u64<E: de::Error>(s: &str) -> Result<u64, E> {
    s.trim()
        .parse::<u64>()
        .map_err(|e| E::custom(format!("invalid integer '{}': {}", s, e)))
}

pub(crate) fn f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_f64(&s)
}

/// Pair with `#[serde(default)]`: an absent key stays `None`, a present one must parse.
pub(crate) fn opt_f64_from_str<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_f64(&s))
        .transpose()
}

pub(crate) fn opt_u64_from_str<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_u64(&s))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_full_timestamp() {
        let ts = parse_timestamp("2025-02-14 19:55:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        assert_eq!(ts.hour(), 19);
        assert_eq!(ts.minute(), 55);
    }

    #[test]
    fn bare_date_is_midnight() {
        let ts = parse_timestamp("2025-02-14").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        assert_eq!(ts.time(), NaiveTime::MIN);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2025-13-01 00:00:00").is_err());
    }
}
