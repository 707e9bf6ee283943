//! Selects the most recent trading day's bars out of an intraday response.

use alphavantage_api::types::{IntradayResponse, Quote, TimeSeries};
use chrono::{NaiveDate, NaiveDateTime};

/// Parallel high/low/close sequences for one trading day.
///
/// All four vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn push(&mut self, quote: &Quote) {
        self.timestamps.push(quote.timestamp);
        self.highs.push(quote.high);
        self.lows.push(quote.low);
        self.closes.push(quote.close);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn reverse(&mut self) {
        self.timestamps.reverse();
        self.highs.reverse();
        self.lows.reverse();
        self.closes.reverse();
    }

    pub fn is_chronological(&self) -> bool {
        self.timestamps.windows(2).all(|w| w[0] <= w[1])
    }

    /// Stable sort of all four sequences by timestamp.
    pub fn sort_chronologically(&mut self) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&i| self.timestamps[i]);
        self.timestamps = order.iter().map(|&i| self.timestamps[i]).collect();
        self.highs = order.iter().map(|&i| self.highs[i]).collect();
        self.lows = order.iter().map(|&i| self.lows[i]).collect();
        self.closes = order.iter().map(|&i| self.closes[i]).collect();
    }
}

/// One trading day's worth of bars, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingDaySeries {
    pub day: NaiveDate,
    pub series: PriceSeries,
}

/// Filters the response down to the day named by `3. Last Refreshed`.
pub fn latest_trading_day(response: &IntradayResponse) -> TradingDaySeries {
    let day = response.trading_day();
    TradingDaySeries {
        day,
        series: select_day(&response.time_series, day),
    }
}

/// Collects the bars dated `day` and returns them in ascending time order.
///
/// The feed lists bars newest first, so the collected sequences are reversed.
/// A feed that breaks that ordering is sorted instead.
pub fn select_day(time_series: &TimeSeries, day: NaiveDate) -> PriceSeries {
    let mut series = PriceSeries::default();
    for quote in time_series.iter().filter(|q| q.date() == day) {
        series.push(quote);
    }
    series.reverse();

    if !series.is_chronological() {
        tracing::warn!(
            "Time series for {} is not newest-first; sorting {} records by timestamp",
            day,
            series.len()
        );
        series.sort_chronologically();
    }

    tracing::debug!(
        "Selected {} of {} records for {}",
        series.len(),
        time_series.len(),
        day
    );
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(ts: &str, high: f64, low: f64, close: f64) -> Quote {
        Quote {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            open: None,
            high,
            low,
            close,
            volume: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn newest_first() -> TimeSeries {
        TimeSeries::new(vec![
            quote("2025-02-14 16:00:00", 13.0, 11.0, 12.0),
            quote("2025-02-14 15:55:00", 12.0, 10.0, 11.0),
            quote("2025-02-14 15:50:00", 11.0, 9.0, 10.0),
            quote("2025-02-13 16:00:00", 99.0, 1.0, 50.0),
        ])
    }

    #[test]
    fn selects_only_matching_day_in_ascending_order() {
        let series = select_day(&newest_first(), day("2025-02-14"));
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes, vec![10.0, 11.0, 12.0]);
        assert_eq!(series.highs, vec![11.0, 12.0, 13.0]);
        assert_eq!(series.lows, vec![9.0, 10.0, 11.0]);
        assert!(series.is_chronological());
    }

    #[test]
    fn no_matching_day_gives_empty_series() {
        let series = select_day(&newest_first(), day("2025-02-17"));
        assert!(series.is_empty());
        assert!(series.highs.is_empty());
        assert!(series.lows.is_empty());
        assert!(series.closes.is_empty());
    }

    #[test]
    fn out_of_order_feed_is_sorted() {
        let shuffled = TimeSeries::new(vec![
            quote("2025-02-14 15:55:00", 12.0, 10.0, 11.0),
            quote("2025-02-14 16:00:00", 13.0, 11.0, 12.0),
            quote("2025-02-14 15:50:00", 11.0, 9.0, 10.0),
        ]);
        let series = select_day(&shuffled, day("2025-02-14"));
        assert!(series.is_chronological());
        assert_eq!(series.closes, vec![10.0, 11.0, 12.0]);
        assert_eq!(series.highs, vec![11.0, 12.0, 13.0]);
    }

    #[test]
    fn reversing_twice_is_identity() {
        let original = select_day(&newest_first(), day("2025-02-14"));
        let mut twice = original.clone();
        twice.reverse();
        assert_ne!(twice, original);
        twice.reverse();
        assert_eq!(twice, original);
    }

    #[test]
    fn latest_trading_day_uses_last_refreshed() {
        let json = r#"{
            "Meta Data": {"3. Last Refreshed": "2025-02-13 16:00:00"},
            "Time Series (5min)": {
                "2025-02-14 16:00:00": {"1. open": "1", "2. high": "2", "3. low": "1", "4. close": "1.5", "5. volume": "1"},
                "2025-02-13 16:00:00": {"2. high": "3", "3. low": "0.5", "4. close": "2.5"}
            }
        }"#;
        let response: IntradayResponse = serde_json::from_str(json).unwrap();
        let selected = latest_trading_day(&response);
        assert_eq!(selected.day, day("2025-02-13"));
        assert_eq!(selected.series.closes, vec![2.5]);
    }
}
