mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stocktracker_lib::config::DEFAULT_BASE_URL;
use stocktracker_lib::{Interval, OutputSize, Tracker, TrackerConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stocktracker")]
#[command(about = "Summarize and chart the latest trading day of intraday prices from Alpha Vantage")]
struct Cli {
    /// Ticker symbol to fetch
    #[arg(long, default_value = "DIS")]
    symbol: String,

    /// Bar interval: 1min, 5min, 15min, 30min or 60min
    #[arg(long, default_value = "5min")]
    interval: Interval,

    /// How much history to request: compact or full
    #[arg(long, default_value = "full")]
    output_size: OutputSize,

    /// Directory the chart is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Alpha Vantage base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Do not print the raw API response
    #[arg(long)]
    no_dump: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stocktracker=info".parse()?)
                .add_directive("alphavantage_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TrackerConfig::from_env()
        .with_symbol(&cli.symbol)?
        .with_interval(cli.interval)
        .with_output_size(cli.output_size)
        .with_base_url(&cli.base_url)
        .with_out_dir(cli.out_dir);
    let tracker = Tracker::new(config)?;

    let response = tracker.fetch().await.context("Error fetching data")?;
    if !cli.no_dump {
        output::print_raw_response(&response.raw)?;
    }

    let analysis = Tracker::analyze(&response.data);
    output::print_summary(&analysis.summary, &cli.output)?;

    let path = tracker.plot(&analysis)?;
    println!("Plot saved as {}", output::display_path(&path));

    Ok(())
}
