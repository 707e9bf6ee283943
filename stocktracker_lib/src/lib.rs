//! Library layer for the stock tracker: configuration, trading-day filtering,
//! summary statistics, and chart rendering on top of `alphavantage_api`.

pub mod chart;
pub mod config;
pub mod error;
pub mod series;
pub mod stats;
pub mod tracker;
pub mod validation;

pub use alphavantage_api;
pub use alphavantage_api::types;
pub use alphavantage_api::{IntradayQuery, Interval, OutputSize, Query};

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use series::{PriceSeries, TradingDaySeries};
pub use stats::Summary;
pub use tracker::{Analysis, Tracker};
