use std::path::Path;

use anyhow::Result;
use stocktracker_lib::Summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// `Debug` formatting keeps the trailing `.0` on whole prices.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "None".to_string(),
    }
}

pub fn summary_lines(summary: &Summary) -> Vec<String> {
    vec![
        format!("Date: {}", summary.date),
        format!("Max High Price: {}", format_price(summary.max_high)),
        format!("Min Low Price: {}", format_price(summary.min_low)),
        format!(
            "Standard Deviation of Close Prices: {}",
            format_price(summary.stdev_close)
        ),
    ]
}

pub fn print_raw_response(raw: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(raw)?);
    Ok(())
}

pub fn print_summary(summary: &Summary, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(summary) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}

/// Drops a leading `./` so the default location prints as a bare file name.
pub fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
