use std::io;

use anyhow::Result;
use log::error;

use jma_forecast::app::run_pipeline;
use jma_forecast::fetch::{forecast_url, HttpFetcher};

/// Forecast office code for Osaka prefecture.
const OSAKA: &str = "270000";

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    let fetcher = HttpFetcher::new();
    if let Err(err) = run_pipeline(&fetcher, &forecast_url(OSAKA), io::stdout().lock()).await {
        error!("forecast failed: {err:?}");
        return Err(err);
    }

    Ok(())
}
