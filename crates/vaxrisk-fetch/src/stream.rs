//! Concurrent snapshot download.

use bytes::Bytes;
use chrono::NaiveDate;
use futures::stream::{self, Stream, StreamExt};

use crate::{FetchError, SnapshotSource};

/// A downloaded daily report.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The report date.
    pub date: NaiveDate,
    /// Raw CSV bytes.
    pub body: Bytes,
}

impl Snapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub const fn new(date: NaiveDate, body: Bytes) -> Self {
        Self { date, body }
    }

    /// Returns the size of the body in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Creates a stream of daily reports for the given dates.
///
/// Reports are downloaded concurrently, up to the source's concurrency limit,
/// and yielded in completion order.
pub fn snapshot_stream<'a, S>(
    source: &'a S,
    dates: Vec<NaiveDate>,
) -> impl Stream<Item = Result<Snapshot, FetchError>> + 'a
where
    S: SnapshotSource + ?Sized,
{
    let concurrency = source.concurrency();

    stream::iter(dates)
        .map(move |date| async move {
            let body = source.fetch_report(date).await?;
            Ok::<_, FetchError>(Snapshot::new(date, body))
        })
        .buffer_unordered(concurrency)
}
