//! JSON output format.

use std::io::Write;
use vaxrisk_types::TimeWindowSeries;

use crate::{FormatError, Formatter, ModelReport};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<W: Write, T: serde::Serialize + ?Sized>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &ModelReport,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(report, writer)
    }

    fn write_series<W: Write + Send>(
        &self,
        series: &TimeWindowSeries,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(series.points.as_slice(), writer)
    }

    fn extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::outcome;
    use std::io::Cursor;
    use vaxrisk_estimate::RiskParameters;

    #[test]
    fn test_report_json() {
        let report = ModelReport::from_outcome(&outcome(), &RiskParameters::default());
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new().write_report(&report, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["location"], "Travis, Texas, US");
        assert_eq!(parsed["vaccine_efficacy_percent"], 65.0);
        assert!(parsed["detection_rate_percent"].is_null());
    }

    #[test]
    fn test_series_json() {
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new()
            .write_series(&outcome().series, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"date\":\"2022-03-15\""));
        assert!(result.contains("\"new_cases\":120"));
    }

    #[test]
    fn test_pretty_json() {
        let report = ModelReport::from_outcome(&outcome(), &RiskParameters::default());
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new()
            .with_pretty(true)
            .write_report(&report, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("\n  \"location\""));
    }
}
