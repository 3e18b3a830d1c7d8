//! Error types for the estimation pipeline.
//!
//! Fetch and cache failures live in the fetch and store crates; everything here is
//! raised by the pure resolver, extractor and estimator stages.

use chrono::NaiveDate;
use thiserror::Error;

use crate::GeoLevel;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, RiskError>;

/// Errors raised while turning records into a risk estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// The resolved data does not have the expected shape.
    #[error(transparent)]
    DataShape(#[from] DataShapeError),

    /// An input lies outside the domain of the model.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A geographic level has nothing to choose from.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

impl RiskError {
    /// Returns true if this is a data-shape failure.
    #[must_use]
    pub const fn is_data_shape(&self) -> bool {
        matches!(self, Self::DataShape(_))
    }

    /// Returns true if this is a model-domain failure.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// The resolved series cannot be used for a rate computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataShapeError {
    /// No rows matched the selection.
    #[error("No records match {location}")]
    EmptySelection {
        /// Human readable label of the selection.
        location: String,
    },

    /// The series does not cover the expected trailing window.
    #[error("Expected {expected} days of data, found {actual}")]
    WindowLength {
        /// Expected number of points.
        expected: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// No row of a date group carries a usable population.
    #[error("No population available on {date}")]
    MissingPopulation {
        /// Date of the group.
        date: NaiveDate,
    },

    /// The series is too short to difference.
    #[error("At least two days are required to compute new cases, found {actual}")]
    TooShort {
        /// Number of grouped days.
        actual: usize,
    },
}

/// An input lies outside the domain where the model is defined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Vaccination rate of exactly 0 or 1 divides by zero.
    #[error("Vaccination rate {rate} is saturated; the model needs a value strictly between 0 and 1")]
    VaccinationRateSaturated {
        /// The offending rate.
        rate: f64,
    },

    /// A parameter is outside its valid interval.
    #[error("{name} = {value} is outside {interval}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
        /// Valid interval in interval notation.
        interval: &'static str,
    },

    /// No population could be found for the geography.
    #[error("No population available for {location}")]
    MissingPopulation {
        /// Human readable location.
        location: String,
    },

    /// The population for the geography is zero.
    #[error("Population for {location} is zero")]
    ZeroPopulation {
        /// Human readable location.
        location: String,
    },

    /// No vaccination rows matched the selection.
    #[error("No vaccination data for {location}")]
    NoVaccinationData {
        /// Human readable location.
        location: String,
    },

    /// The identification-adjusted infection rate exceeds 1.
    #[error("Adjusted infection rate {rate} exceeds 1")]
    InfectionRateAboveOne {
        /// The adjusted rate.
        rate: f64,
    },
}

/// A geographic level offers no meaningful choice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The level should be omitted from the selector.
    #[error("No {level} choices under {parent}")]
    NoChoices {
        /// The level without choices.
        level: GeoLevel,
        /// The enclosing geography.
        parent: String,
    },
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// A trailing window must span at least one day.
    #[error("Trailing window must cover at least one day")]
    EmptyWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let shape: RiskError = DataShapeError::WindowLength {
            expected: 14,
            actual: 13,
        }
        .into();
        let domain: RiskError = DomainError::VaccinationRateSaturated { rate: 0.0 }.into();

        assert!(shape.is_data_shape());
        assert!(!shape.is_domain());
        assert!(domain.is_domain());
        assert!(!domain.is_data_shape());
    }

    #[test]
    fn test_messages() {
        let err = DataShapeError::WindowLength {
            expected: 14,
            actual: 15,
        };
        assert_eq!(err.to_string(), "Expected 14 days of data, found 15");

        let err = SelectionError::NoChoices {
            level: GeoLevel::SubRegion,
            parent: "Texas".into(),
        };
        assert_eq!(err.to_string(), "No sub-region choices under Texas");
    }
}
