//! Memoized dataset store.

use chrono::NaiveDate;
use futures::StreamExt;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use vaxrisk_fetch::{SnapshotSource, parse_daily_report, parse_vaccinations, snapshot_stream};
use vaxrisk_types::{DailyRecord, DateRange, VaccinationKind, VaccinationRecord};

use crate::{Result, SnapshotCache, StoreConfig, StoreError};

/// Default number of modeling days in the trailing window.
pub const DEFAULT_WINDOW_DAYS: usize = 14;

/// Progress of a snapshot download, reported to the caller of [`DatasetStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchProgress {
    /// Downloading `total` uncached reports.
    Started {
        /// Number of reports to download.
        total: usize,
    },
    /// The report for `date` was downloaded and cached.
    Fetched {
        /// The report date.
        date: NaiveDate,
    },
}

/// The two vaccination tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaccinationTables {
    /// Sub-national rows for the domestic country.
    pub domestic: Vec<VaccinationRecord>,
    /// Country-level rows for all countries.
    pub global: Vec<VaccinationRecord>,
}

impl VaccinationTables {
    /// Returns both tables concatenated, domestic rows first.
    #[must_use]
    pub fn merged(&self) -> Vec<VaccinationRecord> {
        self.domestic.iter().chain(&self.global).cloned().collect()
    }
}

/// Case records and vaccination tables for one trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Report dates covered by `cases`.
    pub window: DateRange,
    /// Daily records of every report in the window.
    pub cases: Vec<DailyRecord>,
    /// Vaccination tables fetched for the session day.
    pub vaccinations: VaccinationTables,
}

impl Dataset {
    /// Returns the merged vaccination records.
    #[must_use]
    pub fn merged_vaccinations(&self) -> Vec<VaccinationRecord> {
        self.vaccinations.merged()
    }
}

/// Loads datasets through the on-disk cache, fetching only what is missing.
///
/// Loaded datasets are memoized per session day, so repeated selections reuse
/// the parsed tables.
#[derive(Debug)]
pub struct DatasetStore<S> {
    source: S,
    cache: SnapshotCache,
    window_days: usize,
    memo: RwLock<HashMap<NaiveDate, Arc<Dataset>>>,
}

impl<S: SnapshotSource> DatasetStore<S> {
    /// Creates a store for the configured cache directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directories cannot be created.
    pub fn new(config: &StoreConfig, source: S) -> Result<Self> {
        Ok(Self {
            source,
            cache: SnapshotCache::new(config.data_dir.clone())?,
            window_days: DEFAULT_WINDOW_DAYS,
            memo: RwLock::new(HashMap::new()),
        })
    }

    /// Sets the number of modeling days in the trailing window.
    #[must_use]
    pub const fn with_window_days(mut self, window_days: usize) -> Self {
        self.window_days = window_days;
        self
    }

    /// Returns the underlying cache.
    #[must_use]
    pub const fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Returns the trailing window of report dates for `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window length is zero.
    pub fn window(&self, today: NaiveDate) -> Result<DateRange> {
        Ok(DateRange::trailing(today, self.window_days)?)
    }

    /// Loads the dataset for `today`.
    ///
    /// Uncached reports are downloaded and written to the cache first; every
    /// report in the window is then parsed from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a fetch fails or a cached file cannot be read or parsed.
    pub async fn load<F>(&self, today: NaiveDate, on_progress: F) -> Result<Arc<Dataset>>
    where
        F: FnMut(FetchProgress),
    {
        if let Some(dataset) = self.memo.read().await.get(&today) {
            debug!(%today, "dataset memo hit");
            return Ok(Arc::clone(dataset));
        }

        let window = self.window(today)?;
        self.fetch_missing_reports(&window, on_progress).await?;

        let mut cases = Vec::new();
        for date in window.days() {
            let body = self.cache.read_report(date)?;
            let records =
                parse_daily_report(date, &body)
                    .await
                    .map_err(|e| StoreError::Parse {
                        path: self.cache.report_path(date),
                        source: e,
                    })?;
            cases.extend(records);
        }

        let vaccinations = VaccinationTables {
            domestic: self
                .load_vaccinations(VaccinationKind::Domestic, today)
                .await?,
            global: self.load_vaccinations(VaccinationKind::Global, today).await?,
        };

        info!(%window, rows = cases.len(), "dataset loaded");
        let dataset = Arc::new(Dataset {
            window,
            cases,
            vaccinations,
        });

        let mut memo = self.memo.write().await;
        Ok(Arc::clone(memo.entry(today).or_insert(dataset)))
    }

    /// Downloads and caches the reports of `window` that are not cached yet.
    ///
    /// Returns the number of reports downloaded. Reports written before a failure
    /// stay cached.
    ///
    /// # Errors
    ///
    /// Returns an error if a download or a cache write fails.
    pub async fn fetch_missing_reports<F>(
        &self,
        window: &DateRange,
        mut on_progress: F,
    ) -> Result<usize>
    where
        F: FnMut(FetchProgress),
    {
        let missing = self.cache.missing_reports(window);
        if missing.is_empty() {
            debug!(%window, "all reports cached");
            return Ok(0);
        }

        let total = missing.len();
        on_progress(FetchProgress::Started { total });

        let mut stream = snapshot_stream(&self.source, missing);
        while let Some(snapshot) = stream.next().await {
            let snapshot = snapshot?;
            self.cache.write_report(snapshot.date, &snapshot.body)?;
            on_progress(FetchProgress::Fetched {
                date: snapshot.date,
            });
        }

        Ok(total)
    }

    async fn load_vaccinations(
        &self,
        kind: VaccinationKind,
        today: NaiveDate,
    ) -> Result<Vec<VaccinationRecord>> {
        if self.cache.has_vaccinations(kind, today) {
            debug!(%kind, %today, "vaccination table cached");
        } else {
            let body = self.source.fetch_vaccinations(kind).await?;
            self.cache.write_vaccinations(kind, today, &body)?;
        }

        let body = self.cache.read_vaccinations(kind, today)?;
        parse_vaccinations(&body)
            .await
            .map_err(|e| StoreError::Parse {
                path: self.cache.vaccination_path(kind, today),
                source: e,
            })
    }
}
