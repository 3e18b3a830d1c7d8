//! On-disk snapshot cache.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use vaxrisk_fetch::url::{report_date_from_url, report_file_name};
use vaxrisk_types::{DateRange, VaccinationKind};

use crate::{Result, StoreError};

/// Manages cached snapshot files.
///
/// Daily reports are stored as `<base>/raw/{MM-DD-YYYY}.csv` and vaccination
/// tables as `<base>/vaccine/{domestic|global}/{YYYY-MM-DD}.csv`, keyed by the
/// day they were fetched for. A file that exists is never fetched again.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    /// Base directory for cached data.
    base_path: PathBuf,
    /// Directory for daily reports.
    raw_path: PathBuf,
    /// Directory for vaccination tables.
    vaccine_path: PathBuf,
}

impl SnapshotCache {
    /// Creates a cache rooted at the given path.
    ///
    /// Creates the necessary subdirectories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        let raw_path = base_path.join("raw");
        let vaccine_path = base_path.join("vaccine");

        let mut dirs = vec![base_path.clone(), raw_path.clone(), vaccine_path.clone()];
        dirs.extend(
            VaccinationKind::all()
                .iter()
                .map(|kind| vaccine_path.join(kind.as_str())),
        );

        for path in dirs {
            if !path.exists() {
                fs::create_dir_all(&path).map_err(|e| StoreError::CreateDir {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(Self {
            base_path,
            raw_path,
            vaccine_path,
        })
    }

    /// Returns the base path of the cache.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of a cached daily report.
    #[must_use]
    pub fn report_path(&self, date: NaiveDate) -> PathBuf {
        self.raw_path.join(report_file_name(date))
    }

    /// Returns true if the daily report for `date` is cached.
    #[must_use]
    pub fn has_report(&self, date: NaiveDate) -> bool {
        self.report_path(date).is_file()
    }

    /// Lists the dates of all cached daily reports, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw directory cannot be read.
    pub fn cached_report_dates(&self) -> Result<Vec<NaiveDate>> {
        let entries = fs::read_dir(&self.raw_path).map_err(|e| StoreError::ReadDir {
            path: self.raw_path.clone(),
            source: e,
        })?;

        let mut dates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::ReadDir {
                path: self.raw_path.clone(),
                source: e,
            })?;
            if let Some(date) = entry.file_name().to_str().and_then(report_date_from_url) {
                dates.push(date);
            }
        }

        dates.sort();
        Ok(dates)
    }

    /// Returns the dates in `range` that are not cached yet.
    #[must_use]
    pub fn missing_reports(&self, range: &DateRange) -> Vec<NaiveDate> {
        range.days().filter(|date| !self.has_report(*date)).collect()
    }

    /// Stores a daily report.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_report(&self, date: NaiveDate, body: &[u8]) -> Result<()> {
        write_atomically(&self.report_path(date), body)
    }

    /// Reads a cached daily report.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_report(&self, date: NaiveDate) -> Result<Vec<u8>> {
        read_file(&self.report_path(date))
    }

    /// Returns the path of a cached vaccination table.
    #[must_use]
    pub fn vaccination_path(&self, kind: VaccinationKind, date: NaiveDate) -> PathBuf {
        self.vaccine_path
            .join(kind.as_str())
            .join(format!("{}.csv", date.format("%Y-%m-%d")))
    }

    /// Returns true if the vaccination table of `kind` fetched on `date` is cached.
    #[must_use]
    pub fn has_vaccinations(&self, kind: VaccinationKind, date: NaiveDate) -> bool {
        self.vaccination_path(kind, date).is_file()
    }

    /// Stores a vaccination table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_vaccinations(
        &self,
        kind: VaccinationKind,
        date: NaiveDate,
        body: &[u8],
    ) -> Result<()> {
        write_atomically(&self.vaccination_path(kind, date), body)
    }

    /// Reads a cached vaccination table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_vaccinations(&self, kind: VaccinationKind, date: NaiveDate) -> Result<Vec<u8>> {
        read_file(&self.vaccination_path(kind, date))
    }
}

/// Writes through a sibling `.part` file so an interrupted write never leaves a
/// truncated snapshot that would later count as cached.
fn write_atomically(path: &Path, body: &[u8]) -> Result<()> {
    let partial = path.with_extension("csv.part");
    fs::write(&partial, body).map_err(|e| StoreError::WriteFile {
        path: partial.clone(),
        source: e,
    })?;
    fs::rename(&partial, path).map_err(|e| StoreError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| StoreError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}
