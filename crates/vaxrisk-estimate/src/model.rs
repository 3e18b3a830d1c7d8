//! The full estimation pipeline for one selection.

use serde::{Deserialize, Serialize};
use tracing::info;
use vaxrisk_region::{DOMESTIC_COUNTRY, PopulationIndex, resolve_selection};
use vaxrisk_types::{
    DailyRecord, GeographicSelection, RiskError, RiskEstimate, TimeWindowSeries,
    VaccinationRecord,
};

use crate::{
    DEFAULT_INFECTIOUS_DURATION, RiskParameters, extract_infection_rate,
    extract_vaccination_rate, predict_risk,
};

/// Fixed settings of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Number of days the resolved series must cover.
    pub window_days: usize,
    /// Days an individual stays infectious after a positive test.
    pub infectious_duration: usize,
    /// Country whose vaccination table is broken down by region.
    pub domestic_country: String,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            window_days: 14,
            infectious_duration: DEFAULT_INFECTIOUS_DURATION,
            domestic_country: DOMESTIC_COUNTRY.to_string(),
        }
    }
}

/// Rates fed into the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    /// Share of the population currently infectious.
    pub infection_rate: f64,
    /// Fully vaccinated share of the population.
    pub vaccination_rate: f64,
}

impl ModelInputs {
    /// Returns the infection rate per 100,000 people.
    #[must_use]
    pub fn incidence_per_100k(&self) -> f64 {
        self.infection_rate * 1e5
    }
}

/// Everything computed for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutcome {
    /// The resolved series.
    pub series: TimeWindowSeries,
    /// Rates extracted from the series and the vaccination tables.
    pub inputs: ModelInputs,
    /// The estimated risks.
    pub risk: RiskEstimate,
}

/// Runs resolution, feature extraction and estimation for `selection`.
///
/// # Errors
///
/// Returns a data-shape error when the selection does not resolve to exactly
/// `options.window_days` days, and a domain error when the rates fall outside
/// the model.
pub fn run_model(
    cases: &[DailyRecord],
    vaccinations: &[VaccinationRecord],
    selection: &GeographicSelection,
    params: &RiskParameters,
    options: &ModelOptions,
) -> Result<ModelOutcome, RiskError> {
    let series = resolve_selection(cases, selection)?;
    let infection_rate =
        extract_infection_rate(&series, options.infectious_duration, options.window_days)?;

    let population = PopulationIndex::from_records(cases);
    let vaccination_rate = extract_vaccination_rate(
        vaccinations,
        selection,
        &population,
        &options.domestic_country,
    )?;

    let inputs = ModelInputs {
        infection_rate,
        vaccination_rate,
    };
    let risk = predict_risk(inputs.incidence_per_100k(), vaccination_rate, params)?;

    info!(
        %selection,
        vaccinated = risk.vaccinated,
        unvaccinated = risk.unvaccinated,
        "risk estimated"
    );
    Ok(ModelOutcome {
        series,
        inputs,
        risk,
    })
}
