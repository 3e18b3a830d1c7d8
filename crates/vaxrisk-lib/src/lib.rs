//! Estimate the probability of an active infection by vaccination status.
//!
//! This is a facade crate that re-exports functionality from the vaxrisk
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use vaxrisk_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::default();
//!     let store = DatasetStore::new(&config, DownloadClient::with_defaults()?)?;
//!     let today = chrono::Local::now().date_naive();
//!     let dataset = store.load(today, |_| {}).await?;
//!
//!     let outcome = run_model(
//!         &dataset.cases,
//!         &dataset.merged_vaccinations(),
//!         &GeographicSelection::country("US"),
//!         &RiskParameters::default(),
//!         &ModelOptions::default(),
//!     )?;
//!     println!("{:.3} / {:.3}", outcome.risk.vaccinated, outcome.risk.unvaccinated);
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use vaxrisk_types::*;

// Re-export region resolution
pub use vaxrisk_region::{
    DOMESTIC_COUNTRY, LevelLabels, PINNED_COUNTRIES, PopulationIndex, ROLLING_WINDOW,
    list_countries, list_regions, list_sub_regions, resolve_selection, selectable_regions,
    selectable_sub_regions, valid_regions,
};

// Re-export estimation
pub use vaxrisk_estimate::{
    DEFAULT_INFECTIOUS_DURATION, DEFAULT_VACCINE_EFFICACY, ModelInputs, ModelOptions,
    ModelOutcome, RiskParameters, extract_infection_rate, extract_vaccination_rate,
    predict_risk, run_model,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use vaxrisk_fetch::{
    ClientConfig, DownloadClient, FetchError, ParseError, Snapshot, SnapshotSource,
    parse_daily_report, parse_vaccinations, snapshot_stream, url,
};

// Re-export the dataset store
#[cfg(feature = "store")]
pub use vaxrisk_store::{
    DEFAULT_WINDOW_DAYS, Dataset, DatasetStore, FetchProgress, SnapshotCache, StoreConfig,
    StoreError, VaccinationTables,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use vaxrisk_format::{
    CANNOT_COMPUTE_MESSAGE, CsvFormatter, FormatError, Formatter, JsonFormatter, ModelReport,
    OutputFormat, TextFormatter, UNEXPECTED_DATA_MESSAGE,
};

/// Prelude module for convenient imports.
///
/// ```
/// use vaxrisk_lib::prelude::*;
/// ```
pub mod prelude {
    pub use vaxrisk_types::{
        Area, DailyRecord, DataShapeError, DateRange, DomainError, GeographicSelection,
        RiskError, RiskEstimate, SelectionError, TimeWindowSeries, VaccinationRecord,
    };

    pub use vaxrisk_region::{list_countries, list_regions, list_sub_regions, resolve_selection};

    pub use vaxrisk_estimate::{ModelOptions, ModelOutcome, RiskParameters, predict_risk, run_model};

    #[cfg(feature = "fetch")]
    pub use vaxrisk_fetch::{ClientConfig, DownloadClient, SnapshotSource};

    #[cfg(feature = "store")]
    pub use vaxrisk_store::{Dataset, DatasetStore, StoreConfig, StoreError};

    #[cfg(feature = "format")]
    pub use vaxrisk_format::{
        CsvFormatter, Formatter, JsonFormatter, ModelReport, OutputFormat, TextFormatter,
    };
}
