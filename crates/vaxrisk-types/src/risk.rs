//! Risk estimate output.

use serde::{Deserialize, Serialize};

/// Probabilities of current infection for vaccinated and unvaccinated individuals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// P(infected | vaccinated), rounded to 3 decimals.
    pub vaccinated: f64,
    /// P(infected | unvaccinated), rounded to 3 decimals.
    pub unvaccinated: f64,
    /// P(vaccinated | infected).
    pub p_vaccinated_given_infected: f64,
    /// P(unvaccinated | infected).
    pub p_unvaccinated_given_infected: f64,
}

impl RiskEstimate {
    /// Returns the vaccinated risk as a percentage.
    #[must_use]
    pub fn vaccinated_percent(&self) -> f64 {
        self.vaccinated * 100.0
    }

    /// Returns the unvaccinated risk as a percentage.
    #[must_use]
    pub fn unvaccinated_percent(&self) -> f64 {
        self.unvaccinated * 100.0
    }
}
