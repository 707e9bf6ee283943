use std::str::FromStr;

use url::Url;

use super::common::{Query, QueryCommon};

const FUNCTION: &str = "TIME_SERIES_INTRADAY";

/// Query for `function=TIME_SERIES_INTRADAY`.
#[derive(Clone)]
pub struct IntradayQuery {
    pub common: QueryCommon,
    pub symbol: String,
    pub interval: Interval,
}

impl Default for IntradayQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::default(),
            symbol: "DIS".to_string(),
            interval: Interval::default(),
        }
    }
}

impl Query for IntradayQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("function", FUNCTION);
        url.query_pairs_mut()
            .append_pair("symbol", self.symbol.as_str());
        url.query_pairs_mut()
            .append_pair("interval", &self.interval.to_string());
        self.common.add_to_url(&url)
    }
}

impl IntradayQuery {
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }
}

/// Spacing between intraday records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    OneMinute,
    #[default]
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    SixtyMinutes,
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Interval::OneMinute => "1min",
                Interval::FiveMinutes => "5min",
                Interval::FifteenMinutes => "15min",
                Interval::ThirtyMinutes => "30min",
                Interval::SixtyMinutes => "60min",
            }
        )
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1min" => Ok(Interval::OneMinute),
            "5min" => Ok(Interval::FiveMinutes),
            "15min" => Ok(Interval::FifteenMinutes),
            "30min" => Ok(Interval::ThirtyMinutes),
            "60min" => Ok(Interval::SixtyMinutes),
            _ => Err(format!(
                "unknown interval '{}'. Valid values: 1min, 5min, 15min, 30min, 60min",
                s
            )),
        }
    }
}
