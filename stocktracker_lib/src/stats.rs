//! Summary statistics over one trading day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::series::TradingDaySeries;

/// Max high, min low, and sample standard deviation of closes.
/// Each value is `None` when it is undefined for the input size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub date: NaiveDate,
    pub max_high: Option<f64>,
    pub min_low: Option<f64>,
    pub stdev_close: Option<f64>,
}

impl Summary {
    pub fn from_day(selected: &TradingDaySeries) -> Self {
        let series = &selected.series;
        Self {
            date: selected.day,
            max_high: max_value(&series.highs),
            min_low: min_value(&series.lows),
            stdev_close: sample_std_dev(&series.closes),
        }
    }
}

pub fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Bessel-corrected standard deviation (divisor `n - 1`); `None` for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (n - 1.0)).sqrt())
}
