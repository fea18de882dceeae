use std::io::Write;

use anyhow::{Context, Result};

use crate::fetch::{forecast_url, Fetcher};
use crate::parse::parse;
use crate::present::present;
use crate::regions::RegionDirectory;

/// Fetch, parse, present, strictly in that order. A failed stage stops the
/// pipeline with nothing written.
pub async fn run_pipeline(fetcher: &impl Fetcher, url: &str, out: impl Write) -> Result<()> {
    let raw = fetcher.fetch(url).await.context("fetching forecast")?;
    let entries = parse(&raw).context("parsing forecast")?;
    present(out, &entries)
}

/// Interactive driver: resolve one line of input against the region table,
/// echo the name, then run the pipeline. An unknown code is rejected before
/// any network traffic.
pub async fn run_interactive(
    regions: &RegionDirectory,
    fetcher: &impl Fetcher,
    line: &str,
    mut out: impl Write,
) -> Result<()> {
    let code = line.trim();
    match regions.lookup(code) {
        Some(name) => {
            writeln!(out, "{name}")?;
            run_pipeline(fetcher, &forecast_url(code), out).await
        }
        None => {
            writeln!(out, "unknown region code: {code}")?;
            Ok(())
        }
    }
}
