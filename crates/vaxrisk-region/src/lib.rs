//! Region listings and selection resolution for the vaxrisk infection risk estimator.
//!
//! This crate turns the raw daily records into what the pipeline needs:
//!
//! - [`list_countries`], [`list_regions`], [`list_sub_regions`] - Selector choices
//! - [`valid_regions`] - Whether a level offers a meaningful choice
//! - [`resolve_selection`] - Per-day series for one selection
//! - [`PopulationIndex`] - Latest population per country and region

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod listing;
mod population;
mod resolve;

pub use listing::{
    DOMESTIC_COUNTRY, LevelLabels, PINNED_COUNTRIES, list_countries, list_regions,
    list_sub_regions, selectable_regions, selectable_sub_regions, valid_regions,
};
pub use population::PopulationIndex;
pub use resolve::{ROLLING_WINDOW, resolve_selection};
