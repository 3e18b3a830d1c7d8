//! Display values of one model run, and the fixed messages shown instead of one.

use serde::{Deserialize, Serialize};
use vaxrisk_estimate::{ModelOutcome, RiskParameters};

/// Shown when the resolved series does not cover the expected window.
pub const UNEXPECTED_DATA_MESSAGE: &str = "## Unexpected data!\n\n\
There appears to be an unexpected number of entries in the subset of data requested. \
Rather than deliver questionable results, this app has been programmed to deliver this \
excessively verbose and uninformative error message.\n\n\
Apologies for the inconvenience!";

/// Shown when the inputs fall outside the model's domain.
pub const CANNOT_COMPUTE_MESSAGE: &str = "## Cannot compute! The local data for this selection falls outside the range the model can handle, so no estimate is shown.";

/// A model run reduced to the figures presented to the user.
///
/// Percentages are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    /// Location label, innermost level first.
    pub location: String,
    /// Risk of active infection for a vaccinated individual, in percent.
    pub vaccinated_percent: f64,
    /// Risk of active infection for an unvaccinated individual, in percent.
    pub unvaccinated_percent: f64,
    /// Fully vaccinated share of the population, in percent.
    pub vaccination_rate_percent: f64,
    /// Assumed vaccine efficacy, in percent.
    pub vaccine_efficacy_percent: f64,
    /// Assumed infection detection rate, in percent.
    pub detection_rate_percent: Option<f64>,
    /// Active infections per 100,000 people.
    pub incidence_per_100k: f64,
}

impl ModelReport {
    /// Builds the report of a model run.
    #[must_use]
    pub fn from_outcome(outcome: &ModelOutcome, params: &RiskParameters) -> Self {
        Self {
            location: outcome.series.selection.location_label(),
            vaccinated_percent: round2(outcome.risk.vaccinated_percent()),
            unvaccinated_percent: round2(outcome.risk.unvaccinated_percent()),
            vaccination_rate_percent: round2(outcome.inputs.vaccination_rate * 100.0),
            vaccine_efficacy_percent: round2(params.vaccine_efficacy * 100.0),
            detection_rate_percent: params.identification_rate.map(|r| round2(r * 100.0)),
            incidence_per_100k: round2(outcome.inputs.incidence_per_100k()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
