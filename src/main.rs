use std::io::{self, BufRead};

use anyhow::{Context, Result};
use log::error;

use jma_forecast::app::run_interactive;
use jma_forecast::fetch::HttpFetcher;
use jma_forecast::regions::RegionDirectory;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    let regions = RegionDirectory::new();
    let fetcher = HttpFetcher::new();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading region code")?;

    if let Err(err) = run_interactive(&regions, &fetcher, &line, io::stdout().lock()).await {
        error!("forecast failed: {err:?}");
        return Err(err);
    }

    Ok(())
}
