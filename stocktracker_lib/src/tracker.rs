//! The fetch → filter → aggregate → plot pipeline for one symbol.

use std::path::PathBuf;

use alphavantage_api::types::{IntradayResponse, Response};
use alphavantage_api::Client;

use crate::chart::render_close_chart;
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::series::{latest_trading_day, TradingDaySeries};
use crate::stats::Summary;

/// Result of filtering and aggregating one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub trading_day: TradingDaySeries,
    pub summary: Summary,
}

/// Runs each pipeline stage against a single configuration.
///
/// Stages are separate calls so the caller can report between them; a
/// failed fetch returns before anything downstream runs.
pub struct Tracker {
    client: Client,
    config: TrackerConfig,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        let client = Client::with_base_url(&config.base_url)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Issues the single intraday request.
    pub async fn fetch(&self) -> Result<Response<IntradayResponse>, TrackerError> {
        tracing::info!(
            "Fetching {} intraday ({}) for {}",
            self.config.output_size,
            self.config.interval,
            self.config.symbol
        );
        let response = self.client.get_intraday(&self.config.to_query()).await?;
        tracing::info!(
            "Received {} records, last refreshed {}",
            response.data.time_series.len(),
            response.data.meta_data.last_refreshed
        );
        Ok(response)
    }

    /// Filters to the latest trading day and computes its summary.
    pub fn analyze(response: &IntradayResponse) -> Analysis {
        let trading_day = latest_trading_day(response);
        let summary = Summary::from_day(&trading_day);
        Analysis {
            trading_day,
            summary,
        }
    }

    /// Writes the close-price chart and returns its path.
    pub fn plot(&self, analysis: &Analysis) -> Result<PathBuf, TrackerError> {
        let path = self.config.chart_path();
        render_close_chart(
            &path,
            &self.config.symbol,
            analysis.trading_day.day,
            &analysis.trading_day.series.closes,
        )?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphavantage_api::Error as ApiError;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Raw text keeps the feed's newest-first order.
    const SAMPLE_BODY: &str = r#"{
        "Meta Data": {
            "2. Symbol": "DIS",
            "3. Last Refreshed": "2025-02-14 16:00:00"
        },
        "Time Series (5min)": {
            "2025-02-14 16:00:00": {"1. open": "14", "2. high": "15", "3. low": "13", "4. close": "14", "5. volume": "10"},
            "2025-02-14 15:55:00": {"1. open": "12", "2. high": "13", "3. low": "11", "4. close": "12", "5. volume": "10"},
            "2025-02-14 15:50:00": {"1. open": "10", "2. high": "11", "3. low": "9", "4. close": "10", "5. volume": "10"},
            "2025-02-13 16:00:00": {"1. open": "50", "2. high": "99", "3. low": "1", "4. close": "50", "5. volume": "10"}
        }
    }"#;

    fn tracker_for(server: &MockServer) -> Tracker {
        let config = TrackerConfig::default()
            .with_base_url(&server.uri())
            .with_api_key("test-key".to_string());
        Tracker::new(config).unwrap()
    }

    #[tokio::test]
    async fn fetch_and_analyze() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "DIS"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_BODY))
            .mount(&server)
            .await;

        let tracker = tracker_for(&server);
        let response = tracker.fetch().await.unwrap();
        let analysis = Tracker::analyze(&response.data);

        assert_eq!(
            analysis.summary.date,
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
        );
        assert_eq!(analysis.trading_day.series.closes, vec![10.0, 12.0, 14.0]);
        assert_eq!(analysis.summary.max_high, Some(15.0));
        assert_eq!(analysis.summary.min_low, Some(9.0));
        assert_eq!(analysis.summary.stdev_close, Some(2.0));
    }

    #[tokio::test]
    async fn non_success_status_stops_pipeline() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let tracker = tracker_for(&server);
        let err = tracker.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Api(ApiError::HttpStatus { status: 500, .. })
        ));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn analyze_empty_day() {
        let response: IntradayResponse = serde_json::from_value(serde_json::json!({
            "Meta Data": {"3. Last Refreshed": "2025-02-17 09:30:00"},
            "Time Series (5min)": {
                "2025-02-14 16:00:00": {"1. open": "1", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}
            }
        }))
        .unwrap();
        let analysis = Tracker::analyze(&response);
        assert!(analysis.trading_day.series.is_empty());
        assert_eq!(analysis.summary.max_high, None);
        assert_eq!(analysis.summary.min_low, None);
        assert_eq!(analysis.summary.stdev_close, None);
    }
}
