//! Core types for the vaxrisk infection risk estimator.
//!
//! This crate provides the data structures shared by every stage of the pipeline:
//!
//! - [`DailyRecord`] - One row of a daily regional case report
//! - [`VaccinationRecord`] - One row of a vaccination snapshot
//! - [`GeographicSelection`] - Country / region / sub-region choice
//! - [`TimeWindowSeries`] - Per-day series resolved for one selection
//! - [`RiskEstimate`] - Conditional infection probabilities
//! - [`DateRange`] - Inclusive range of report dates

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod record;
mod risk;
mod selection;
mod series;

pub use date_range::{DateRange, DayIterator};
pub use error::{DataShapeError, DateRangeError, DomainError, Result, RiskError, SelectionError};
pub use record::{DailyRecord, VaccinationKind, VaccinationRecord};
pub use risk::RiskEstimate;
pub use selection::{ALL, Area, GeoLevel, GeographicSelection, NOT_REPORTED};
pub use series::{SeriesPoint, TimeWindowSeries};
