//! Seam between the dataset store and the remote feeds.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use vaxrisk_types::VaccinationKind;

use crate::url::{daily_report_url, vaccination_url};
use crate::{DownloadClient, FetchError};

/// A provider of raw snapshot files.
///
/// [`DownloadClient`] implements this against the public feeds; tests and
/// offline tools can provide files from memory instead.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetches the daily case report for `date`.
    async fn fetch_report(&self, date: NaiveDate) -> Result<Bytes, FetchError>;

    /// Fetches the latest vaccination table of the given kind.
    async fn fetch_vaccinations(&self, kind: VaccinationKind) -> Result<Bytes, FetchError>;

    /// Maximum number of concurrent report fetches.
    fn concurrency(&self) -> usize {
        1
    }
}

#[async_trait]
impl SnapshotSource for DownloadClient {
    async fn fetch_report(&self, date: NaiveDate) -> Result<Bytes, FetchError> {
        self.download(&daily_report_url(date)).await
    }

    async fn fetch_vaccinations(&self, kind: VaccinationKind) -> Result<Bytes, FetchError> {
        self.download(&vaccination_url(kind)).await
    }

    fn concurrency(&self) -> usize {
        self.config().concurrency.max(1)
    }
}
