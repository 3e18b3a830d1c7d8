//! Display utilities and output formatting for the vaxrisk CLI.

use anyhow::Result;
use clap::ValueEnum;
use indicatif::ProgressStyle;
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::Path;
use vaxrisk_lib::prelude::*;

/// Output format of the model report.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
            Format::Csv => Self::Csv,
        }
    }
}

/// Returns true if prompts can be shown.
pub(crate) fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Progress bar style for snapshot downloads.
pub(crate) fn progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )?
        .progress_chars("=>-"))
}

/// Write a model report in the given format.
pub(crate) fn write_report<W: Write + Send>(
    report: &ModelReport,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new().write_report(report, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_report(report, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_report(report, writer)?,
    }
    Ok(())
}

/// Write a resolved series to a file, choosing the format from its extension.
///
/// Unknown extensions are written as CSV.
pub(crate) fn write_series(series: &TimeWindowSeries, output: &Path) -> Result<()> {
    let format = output
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse::<OutputFormat>().ok())
        .unwrap_or(OutputFormat::Csv);

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Text => TextFormatter::new().write_series(series, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_series(series, &mut writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_series(series, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}
