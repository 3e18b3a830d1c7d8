//! Bayesian risk estimator.
//!
//! By Bayes' theorem `P(I|V) = P(V|I) P(I) / P(V)`, where `P(V)` is the local
//! vaccination rate, `P(I)` the local infection rate and
//!
//! ```text
//! P(V|I) = P(V) (1 - efficacy) / (P(V) (1 - efficacy) + P(¬V))
//! ```
//!
//! is the share of infections expected among the vaccinated when both groups
//! face the same exposure. The unvaccinated branch is symmetric.

use serde::{Deserialize, Serialize};
use vaxrisk_types::{DomainError, RiskEstimate};

/// Assumed vaccine efficacy against infection.
pub const DEFAULT_VACCINE_EFFICACY: f64 = 0.65;

/// Assumptions of the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    /// Proportion of potential infections blocked by the vaccine, in `[0, 1]`.
    pub vaccine_efficacy: f64,
    /// Share of true infections captured in the reported counts, in `(0, 1]`.
    /// `None` takes the reported counts at face value.
    pub identification_rate: Option<f64>,
}

impl RiskParameters {
    /// Creates a parameter set.
    #[must_use]
    pub const fn new(vaccine_efficacy: f64, identification_rate: Option<f64>) -> Self {
        Self {
            vaccine_efficacy,
            identification_rate,
        }
    }

    /// Creates a parameter set from whole percentages, as entered by a user.
    #[must_use]
    pub fn from_percentages(efficacy_percent: u8, detection_percent: u8) -> Self {
        Self::new(
            f64::from(efficacy_percent) / 100.0,
            Some(f64::from(detection_percent) / 100.0),
        )
    }

    /// Checks that both parameters lie in their intervals.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.vaccine_efficacy) {
            return Err(DomainError::OutOfRange {
                name: "vaccine_efficacy",
                value: self.vaccine_efficacy,
                interval: "[0, 1]",
            });
        }
        if let Some(rate) = self.identification_rate
            && !(rate > 0.0 && rate <= 1.0)
        {
            return Err(DomainError::OutOfRange {
                name: "identification_rate",
                value: rate,
                interval: "(0, 1]",
            });
        }
        Ok(())
    }
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self::new(DEFAULT_VACCINE_EFFICACY, None)
    }
}

/// Estimates the probability of active infection for vaccinated and unvaccinated
/// individuals.
///
/// `incidence_per_100k` is the local rate of active infections per 100,000 people
/// and `vaccination_rate` the fully vaccinated share of the population. When an
/// identification rate is set, the incidence is scaled up by its inverse. Both
/// risks are rounded half-to-even to 3 decimals; the posteriors are not rounded.
///
/// # Errors
///
/// Returns a [`DomainError`] if a parameter is out of range, if the vaccination
/// rate is exactly 0 or 1, or if the scaled infection rate exceeds 1.
pub fn predict_risk(
    incidence_per_100k: f64,
    vaccination_rate: f64,
    params: &RiskParameters,
) -> Result<RiskEstimate, DomainError> {
    params.validate()?;

    if !(incidence_per_100k.is_finite() && incidence_per_100k >= 0.0) {
        return Err(DomainError::OutOfRange {
            name: "incidence_per_100k",
            value: incidence_per_100k,
            interval: "[0, inf)",
        });
    }
    if !(0.0..=1.0).contains(&vaccination_rate) {
        return Err(DomainError::OutOfRange {
            name: "vaccination_rate",
            value: vaccination_rate,
            interval: "[0, 1]",
        });
    }
    if vaccination_rate == 0.0 || vaccination_rate == 1.0 {
        return Err(DomainError::VaccinationRateSaturated {
            rate: vaccination_rate,
        });
    }

    let mut infection_rate = incidence_per_100k / 1e5;
    if let Some(identification_rate) = params.identification_rate {
        infection_rate /= identification_rate;
    }
    if infection_rate > 1.0 {
        return Err(DomainError::InfectionRateAboveOne {
            rate: infection_rate,
        });
    }

    let p_v = vaccination_rate;
    let p_nv = 1.0 - vaccination_rate;
    let infected_vaccinated = p_v * (1.0 - params.vaccine_efficacy);
    let p_infected = infected_vaccinated + p_nv;

    let p_v_i = infected_vaccinated / p_infected;
    let p_nv_i = p_nv / p_infected;

    Ok(RiskEstimate {
        vaccinated: round3(p_v_i * infection_rate / p_v),
        unvaccinated: round3(p_nv_i * infection_rate / p_nv),
        p_vaccinated_given_infected: p_v_i,
        p_unvaccinated_given_infected: p_nv_i,
    })
}

fn round3(value: f64) -> f64 {
    ((value * 1000.0).round_ties_even() / 1000.0).clamp(0.0, 1.0)
}
