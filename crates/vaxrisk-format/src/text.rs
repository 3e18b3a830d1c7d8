//! Human-readable text output.

use std::io::Write;
use vaxrisk_types::TimeWindowSeries;

use crate::{FormatError, Formatter, ModelReport};

/// Text formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a new text formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &ModelReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "The model estimates that in {}:", report.location)?;
        writeln!(writer)?;
        writeln!(
            writer,
            "  * A vaccinated individual has a {}% probability of active COVID-19 infection",
            report.vaccinated_percent
        )?;
        writeln!(
            writer,
            "  * An unvaccinated individual has a {}% probability of active COVID-19 infection",
            report.unvaccinated_percent
        )?;
        writeln!(writer)?;
        writeln!(writer, "Based on:")?;
        writeln!(
            writer,
            "  * A local vaccination rate of {}%",
            report.vaccination_rate_percent
        )?;
        writeln!(
            writer,
            "  * An estimated vaccine efficacy of {}% against COVID-19 infection",
            report.vaccine_efficacy_percent
        )?;
        if let Some(detection) = report.detection_rate_percent {
            writeln!(writer, "  * An infection detection rate of {detection}%")?;
        }
        writeln!(
            writer,
            "  * A rate of {} infections per 100,000 people in the local population",
            report.incidence_per_100k
        )?;
        Ok(())
    }

    fn write_series<W: Write + Send>(
        &self,
        series: &TimeWindowSeries,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", series.selection.location_label())?;
        writeln!(
            writer,
            "{:<10}  {:>12}  {:>12}  {:>10}  {:>9}  {:>9}",
            "date", "confirmed", "population", "per 100k", "new", "7d mean"
        )?;
        for point in &series.points {
            let mean = point
                .new_cases_rolling_mean
                .map_or_else(|| "-".to_string(), |m| format!("{m:.1}"));
            writeln!(
                writer,
                "{:<10}  {:>12}  {:>12}  {:>10.1}  {:>9}  {:>9}",
                point.date.format("%Y-%m-%d"),
                point.confirmed_cases,
                point.population,
                point.incidence_rate,
                point.new_cases,
                mean
            )?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
