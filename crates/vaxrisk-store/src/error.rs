//! Errors raised by the dataset store.

use std::path::PathBuf;
use thiserror::Error;
use vaxrisk_fetch::{FetchError, ParseError};
use vaxrisk_types::DateRangeError;

/// Errors that can occur while loading snapshots.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Remote retrieval failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A cached snapshot could not be parsed.
    #[error("Failed to parse snapshot '{path}': {source}")]
    Parse {
        /// The cached file.
        path: PathBuf,
        /// The underlying parse error.
        source: ParseError,
    },

    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file '{path}': {source}")]
    ParseConfig {
        /// The configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Invalid trailing window.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

impl StoreError {
    /// Returns true if the failure happened while talking to the remote feed.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
