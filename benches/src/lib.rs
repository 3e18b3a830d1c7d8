//! Synthetic tables for the vaxrisk benchmarks.
//!
//! The shapes follow the daily reports: one row per county per day, with
//! cumulative counts that only grow.

use chrono::{Days, NaiveDate};
use vaxrisk_lib::{DailyRecord, VaccinationRecord};

/// Size of a synthetic case table.
#[derive(Debug, Clone, Copy)]
pub struct TableShape {
    /// Number of report days.
    pub days: usize,
    /// Number of regions in the domestic country.
    pub regions: usize,
    /// Number of sub-regions per region.
    pub sub_regions: usize,
}

impl TableShape {
    /// Rows the table will contain.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.days * self.regions * self.sub_regions
    }
}

/// First report day of every synthetic table.
#[must_use]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 2, 1).unwrap_or_default()
}

/// Builds US case rows named `Region {r}` / `County {s}`.
///
/// Every county has 50,000 people and gains `10 + s` cases a day.
#[must_use]
pub fn synthetic_cases(shape: TableShape) -> Vec<DailyRecord> {
    let mut records = Vec::with_capacity(shape.rows());
    for day in 0..shape.days {
        let date = start_date() + Days::new(day as u64);
        for r in 0..shape.regions {
            for s in 0..shape.sub_regions {
                let confirmed = 1_000 + (day * (10 + s)) as u64;
                records.push(DailyRecord::new(
                    date,
                    "US",
                    Some(format!("Region {r}")),
                    Some(format!("County {s}")),
                    confirmed,
                    confirmed as f64 / 50_000.0 * 1e5,
                ));
            }
        }
    }
    records
}

/// Builds one domestic vaccination row per region plus a country total.
#[must_use]
pub fn synthetic_vaccinations(shape: TableShape) -> Vec<VaccinationRecord> {
    let per_region = (shape.sub_regions * 20_000) as u64;
    (0..shape.regions)
        .map(|r| VaccinationRecord::new("US", Some(format!("Region {r}")), per_region, None))
        .chain(std::iter::once(VaccinationRecord::new(
            "US",
            None,
            per_region * shape.regions as u64,
            None,
        )))
        .collect()
}
