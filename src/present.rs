use std::io::Write;

use anyhow::Result;

use crate::parse::ForecastEntry;

/// One line per entry, date portion only.
pub fn present(mut out: impl Write, entries: &[ForecastEntry]) -> Result<()> {
    for entry in entries {
        writeln!(out, "{} {}", entry.at.format("%Y/%m/%d"), entry.condition)?;
    }
    Ok(())
}
