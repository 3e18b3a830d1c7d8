//! Feature extraction and Bayesian risk estimation for the vaxrisk infection risk estimator.
//!
//! - [`extract_infection_rate`] - Active infections per head over the trailing window
//! - [`extract_vaccination_rate`] - Fully vaccinated share of the population
//! - [`predict_risk`] - Bayesian inversion into conditional infection risks
//! - [`run_model`] - The whole pipeline for one selection

#![doc(issue_tracker_base_url = "https://github.com/vaxrisk/vaxrisk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bayes;
mod features;
mod model;

pub use bayes::{DEFAULT_VACCINE_EFFICACY, RiskParameters, predict_risk};
pub use features::{DEFAULT_INFECTIOUS_DURATION, extract_infection_rate, extract_vaccination_rate};
pub use model::{ModelInputs, ModelOptions, ModelOutcome, run_model};
