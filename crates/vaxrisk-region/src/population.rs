//! Population lookup at country and region granularity.

use chrono::NaiveDate;
use std::collections::HashMap;
use vaxrisk_types::DailyRecord;

/// Population per country and per (country, region), taken from each country's
/// most recent report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationIndex {
    countries: HashMap<String, u64>,
    regions: HashMap<String, HashMap<String, u64>>,
}

impl PopulationIndex {
    /// Builds the index from daily records.
    ///
    /// Rows without a derived population do not contribute.
    #[must_use]
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let mut latest: HashMap<&str, NaiveDate> = HashMap::new();
        for record in records {
            latest
                .entry(record.country.as_str())
                .and_modify(|date| *date = (*date).max(record.date))
                .or_insert(record.date);
        }

        let mut index = Self::default();
        for record in records {
            if latest.get(record.country.as_str()) != Some(&record.date) {
                continue;
            }
            let Some(population) = record.population else {
                continue;
            };

            let country = index.countries.entry(record.country.clone()).or_default();
            *country = country.saturating_add(population);
            if let Some(region) = &record.region {
                let region = index
                    .regions
                    .entry(record.country.clone())
                    .or_default()
                    .entry(region.clone())
                    .or_default();
                *region = region.saturating_add(population);
            }
        }
        index
    }

    /// Returns the population of a country, or of one of its regions.
    #[must_use]
    pub fn lookup(&self, country: &str, region: Option<&str>) -> Option<u64> {
        match region {
            Some(region) => self.regions.get(country)?.get(region).copied(),
            None => self.countries.get(country).copied(),
        }
    }

    /// Returns true if the index holds no population at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
