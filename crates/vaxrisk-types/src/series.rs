//! Per-day series resolved for one selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DataShapeError, GeographicSelection};

/// One day of a resolved series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Report date.
    pub date: NaiveDate,
    /// Cumulative confirmed cases summed over the selection.
    pub confirmed_cases: u64,
    /// Population summed over the selection.
    pub population: u64,
    /// Cumulative cases per 100,000 population.
    pub incidence_rate: f64,
    /// Cases added since the previous report. Negative after data revisions.
    pub new_cases: i64,
    /// Trailing 7-day mean of `new_cases`, once seven days are available.
    pub new_cases_rolling_mean: Option<f64>,
}

/// Ordered per-day series for one geographic selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindowSeries {
    /// The selection the series was resolved for.
    pub selection: GeographicSelection,
    /// Points in ascending date order.
    pub points: Vec<SeriesPoint>,
}

impl TimeWindowSeries {
    /// Creates a series.
    #[must_use]
    pub const fn new(selection: GeographicSelection, points: Vec<SeriesPoint>) -> Self {
        Self { selection, points }
    }

    /// Returns the number of days in the series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Checks that the series covers exactly `expected` days.
    ///
    /// # Errors
    ///
    /// Returns [`DataShapeError::WindowLength`] on any other length.
    pub const fn ensure_window(&self, expected: usize) -> Result<(), DataShapeError> {
        if self.points.len() != expected {
            return Err(DataShapeError::WindowLength {
                expected,
                actual: self.points.len(),
            });
        }
        Ok(())
    }

    /// Sums `new_cases` over the last `days` points.
    #[must_use]
    pub fn trailing_new_cases(&self, days: usize) -> i64 {
        let skip = self.points.len().saturating_sub(days);
        self.points[skip..].iter().map(|p| p.new_cases).sum()
    }
}
