//! Output formatters for the vaxrisk infection risk estimator.
//!
//! This crate renders model results and resolved series:
//!
//! - [`TextFormatter`] - Human-readable report
//! - [`JsonFormatter`] - JSON, compact or pretty-printed
//! - [`CsvFormatter`] - CSV rows
//! - [`ModelReport`] - Display values of one model run

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod report;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use report::{CANNOT_COMPUTE_MESSAGE, ModelReport, UNEXPECTED_DATA_MESSAGE};
pub use text::TextFormatter;
