//! CSV output format.

use std::io::Write;
use vaxrisk_types::TimeWindowSeries;

use crate::{FormatError, Formatter, ModelReport};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Quotes a text field that contains the delimiter, a quote or a newline.
    fn field(&self, value: &str) -> String {
        if value.contains([self.delimiter, '"', '\n']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &ModelReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "location{d}vaccinated_percent{d}unvaccinated_percent{d}vaccination_rate_percent{d}vaccine_efficacy_percent{d}detection_rate_percent{d}incidence_per_100k"
            )?;
        }

        let detection = report
            .detection_rate_percent
            .map(|p| p.to_string())
            .unwrap_or_default();
        writeln!(
            writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            self.field(&report.location),
            report.vaccinated_percent,
            report.unvaccinated_percent,
            report.vaccination_rate_percent,
            report.vaccine_efficacy_percent,
            detection,
            report.incidence_per_100k
        )?;

        Ok(())
    }

    fn write_series<W: Write + Send>(
        &self,
        series: &TimeWindowSeries,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "date{d}confirmed{d}population{d}incidence_rate{d}new_cases{d}new_cases_7d_mean"
            )?;
        }

        for point in &series.points {
            let mean = point
                .new_cases_rolling_mean
                .map(|m| m.to_string())
                .unwrap_or_default();
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
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
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
