//! Case and vaccination records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a daily regional case report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Report date the row belongs to.
    pub date: NaiveDate,
    /// Country name.
    pub country: String,
    /// First-level subdivision (state, province).
    pub region: Option<String>,
    /// Second-level subdivision (county).
    pub sub_region: Option<String>,
    /// Cumulative confirmed cases.
    pub confirmed_cases: u64,
    /// Cumulative cases per 100,000 population.
    pub incidence_rate_per_100k: f64,
    /// Population derived from confirmed cases and incidence rate.
    pub population: Option<u64>,
}

impl DailyRecord {
    /// Creates a record, deriving its population from the incidence rate.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        country: impl Into<String>,
        region: Option<String>,
        sub_region: Option<String>,
        confirmed_cases: u64,
        incidence_rate_per_100k: f64,
    ) -> Self {
        Self {
            date,
            country: country.into(),
            region,
            sub_region,
            confirmed_cases,
            incidence_rate_per_100k,
            population: Self::derive_population(confirmed_cases, incidence_rate_per_100k),
        }
    }

    /// Derives population as `floor(confirmed / incidence * 100000)`.
    ///
    /// Returns `None` when the incidence rate is zero, negative or not finite, and
    /// when the population would not fit in a `u64`.
    #[must_use]
    pub fn derive_population(confirmed_cases: u64, incidence_rate_per_100k: f64) -> Option<u64> {
        if !incidence_rate_per_100k.is_finite() || incidence_rate_per_100k <= 0.0 {
            return None;
        }
        let population = (confirmed_cases as f64 / incidence_rate_per_100k * 1e5).floor();
        (population.is_finite() && population < u64::MAX as f64).then_some(population as u64)
    }
}

/// Which vaccination table a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaccinationKind {
    /// Sub-national table for the domestic country.
    Domestic,
    /// Country-level table for every country.
    Global,
}

impl VaccinationKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Global => "global",
        }
    }

    /// Returns both kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Domestic, Self::Global]
    }
}

impl std::fmt::Display for VaccinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a vaccination snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationRecord {
    /// Country name.
    pub country: String,
    /// Region, `None` for a country-level aggregate.
    pub region: Option<String>,
    /// People who completed a primary series.
    pub people_fully_vaccinated: u64,
    /// Date the figure was reported for.
    pub as_of: Option<NaiveDate>,
}

impl VaccinationRecord {
    /// Creates a vaccination record.
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        region: Option<String>,
        people_fully_vaccinated: u64,
        as_of: Option<NaiveDate>,
    ) -> Self {
        Self {
            country: country.into(),
            region,
            people_fully_vaccinated,
            as_of,
        }
    }

    /// Returns true if the record is a country-level aggregate.
    #[must_use]
    pub const fn is_country_level(&self) -> bool {
        self.region.is_none()
    }
}
