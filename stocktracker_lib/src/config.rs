//! Run configuration: which series to fetch and where the chart goes.

use std::path::PathBuf;

use alphavantage_api::{IntradayQuery, Interval, OutputSize, Query};

use crate::error::TrackerError;
use crate::validation::validate_symbol;

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "ALPHA_APIKEY";
pub const DEFAULT_SYMBOL: &str = "DIS";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Everything one run needs. `Default` is the stock configuration:
/// DIS, 5min bars, full output, chart in the working directory.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub symbol: String,
    pub interval: Interval,
    pub output_size: OutputSize,
    pub api_key: String,
    pub base_url: String,
    pub out_dir: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            interval: Interval::default(),
            output_size: OutputSize::default(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl TrackerConfig {
    /// Default configuration with the API key taken from `ALPHA_APIKEY`.
    pub fn from_env() -> Self {
        Self::default().with_api_key(api_key_from(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn with_symbol(mut self, symbol: &str) -> Result<Self, TrackerError> {
        self.symbol = validate_symbol(symbol)?;
        Ok(self)
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = out_dir;
        self
    }

    /// `<SYMBOL>.png`
    pub fn chart_file_name(&self) -> String {
        format!("{}.png", self.symbol)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.out_dir.join(self.chart_file_name())
    }

    pub fn to_query(&self) -> IntradayQuery {
        IntradayQuery::default()
            .with_symbol(&self.symbol)
            .with_interval(self.interval)
            .with_output_size(self.output_size)
            .with_api_key(&self.api_key)
    }
}

/// A missing or blank key still produces a request; the API answers it
/// with an error message.
fn api_key_from(value: Option<String>) -> String {
    match value {
        Some(key) if !key.trim().is_empty() => key.trim().to_string(),
        _ => {
            tracing::warn!(
                "{} is not set; the request will be sent without an API key",
                API_KEY_ENV
            );
            String::new()
        }
    }
}
