//! HTTP client and CSV parsing for vaxrisk snapshots.
//!
//! This crate provides the retrieval side of the regional dataset store:
//!
//! - [`url`] - Daily report and vaccination table URLs
//! - [`DownloadClient`] - HTTP client for snapshot files
//! - [`SnapshotSource`] - Seam between the store and the remote feed
//! - [`parse_daily_report`] / [`parse_vaccinations`] - Typed CSV parsing
//! - [`snapshot_stream`] - Concurrent download of several report dates

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod source;
mod stream;
pub mod url;

pub use client::{ClientConfig, DownloadClient, FetchError};
pub use parse::{ParseError, parse_daily_report, parse_vaccinations};
pub use source::SnapshotSource;
pub use stream::{Snapshot, snapshot_stream};
