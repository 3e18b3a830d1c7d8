//! On-disk snapshot cache and memoized dataset store for vaxrisk.
//!
//! This crate provides the regional dataset store:
//!
//! - [`StoreConfig`] - Cache directory configuration
//! - [`SnapshotCache`] - One CSV file per report date on disk
//! - [`DatasetStore`] - Fetches what is missing, parses everything, memoizes per day
//! - [`Dataset`] - Case records and vaccination tables for one trailing window

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod config;
mod error;
mod store;

pub use cache::SnapshotCache;
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{DEFAULT_WINDOW_DAYS, Dataset, DatasetStore, FetchProgress, VaccinationTables};
