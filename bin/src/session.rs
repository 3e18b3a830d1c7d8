//! Per-invocation state: configuration, the session date and the dataset store.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use vaxrisk_lib::prelude::*;
use vaxrisk_lib::FetchProgress;

use crate::display::progress_style;

/// Everything a command needs, built once at startup.
pub(crate) struct Session {
    store: DatasetStore<DownloadClient>,
    today: NaiveDate,
    quiet: bool,
}

impl Session {
    /// Loads the configuration and opens the cache.
    ///
    /// `--data-dir` wins over the configuration file, which wins over the
    /// platform default.
    pub(crate) fn new(
        config_path: Option<&Path>,
        data_dir: Option<PathBuf>,
        today: NaiveDate,
        quiet: bool,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => StoreConfig::from_json_file(path)?,
            None => StoreConfig::default(),
        };
        if let Some(dir) = data_dir {
            config = config.with_data_dir(dir);
        }
        debug!(data_dir = %config.data_dir.display(), %today, "session configured");

        let client = DownloadClient::with_defaults().context("Failed to create HTTP client")?;
        let store = DatasetStore::new(&config, client)?;

        Ok(Self {
            store,
            today,
            quiet,
        })
    }

    pub(crate) const fn today(&self) -> NaiveDate {
        self.today
    }

    pub(crate) const fn store(&self) -> &DatasetStore<DownloadClient> {
        &self.store
    }

    /// Loads the dataset of the session date, showing download progress.
    pub(crate) async fn dataset(&self) -> Result<Arc<Dataset>> {
        let style = progress_style()?;
        let quiet = self.quiet;
        let mut bar: Option<ProgressBar> = None;

        let dataset = self
            .store
            .load(self.today, |event| match event {
                FetchProgress::Started { total } => {
                    let pb = if quiet {
                        ProgressBar::hidden()
                    } else {
                        ProgressBar::new(total as u64)
                    };
                    pb.set_style(style.clone());
                    pb.set_message("daily reports");
                    bar = Some(pb);
                }
                FetchProgress::Fetched { date } => {
                    if let Some(pb) = &bar {
                        pb.set_message(date.to_string());
                        pb.inc(1);
                    }
                }
            })
            .await
            .context("Failed to load case data")?;

        if let Some(pb) = bar {
            pb.finish_with_message("reports cached");
        }
        Ok(dataset)
    }
}
