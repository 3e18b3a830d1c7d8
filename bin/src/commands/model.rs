//! Model command implementation.
//!
//! Resolves the location, collects the two assumptions and prints the estimate.
//! Data-shape and domain failures are rendered as fixed messages rather than
//! errors; only store failures abort the command.

use anyhow::{Context, Result, bail, ensure};
use inquire::validator::Validation;
use inquire::{CustomType, Select};
use std::path::PathBuf;
use tracing::{debug, warn};
use vaxrisk_lib::prelude::*;
use vaxrisk_lib::{
    ALL, CANNOT_COMPUTE_MESSAGE, LevelLabels, PINNED_COUNTRIES, UNEXPECTED_DATA_MESSAGE,
    selectable_regions, selectable_sub_regions,
};

use crate::display::{self, Format};
use crate::session::Session;

const DEFAULT_DETECTION_RATE: u8 = 100;
const DEFAULT_EFFICACY: u8 = 65;

/// Inputs of the model page.
pub(crate) struct ModelArgs {
    pub(crate) country: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) sub_region: Option<String>,
    pub(crate) detection_rate: Option<u8>,
    pub(crate) efficacy: Option<u8>,
    pub(crate) format: Format,
    pub(crate) series: Option<PathBuf>,
    pub(crate) interactive: bool,
}

/// Runs the model for one location.
pub(crate) async fn run(args: ModelArgs, session: &Session) -> Result<()> {
    let dataset = session.dataset().await?;
    let selection = choose_selection(&dataset.cases, &args)?;

    let detection = match args.detection_rate {
        Some(rate) => rate,
        None if args.interactive => {
            prompt_percent("Infection detection rate (%)", DEFAULT_DETECTION_RATE)?
        }
        None => DEFAULT_DETECTION_RATE,
    };
    let efficacy = match args.efficacy {
        Some(efficacy) => efficacy,
        None if args.interactive => {
            prompt_percent("Estimated vaccine efficacy (%)", DEFAULT_EFFICACY)?
        }
        None => DEFAULT_EFFICACY,
    };
    let params = RiskParameters::from_percentages(efficacy, detection);

    let outcome = run_model(
        &dataset.cases,
        &dataset.merged_vaccinations(),
        &selection,
        &params,
        &ModelOptions::default(),
    );

    match outcome {
        Ok(outcome) => {
            let report = ModelReport::from_outcome(&outcome, &params);
            display::write_report(&report, args.format.into(), std::io::stdout())?;
            if let Some(path) = &args.series {
                display::write_series(&outcome.series, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                debug!(path = %path.display(), "series written");
            }
        }
        Err(err) if err.is_data_shape() => {
            warn!(%err, %selection, "unexpected data");
            println!("{UNEXPECTED_DATA_MESSAGE}");
        }
        Err(err) if err.is_domain() => {
            warn!(%err, %selection, "outside the model domain");
            println!("{CANNOT_COMPUTE_MESSAGE}");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Picks country, region and sub-region from the arguments or by prompting.
///
/// A level without meaningful choices is omitted.
fn choose_selection(records: &[DailyRecord], args: &ModelArgs) -> Result<GeographicSelection> {
    let countries = list_countries(records, &PINNED_COUNTRIES);
    let country = match &args.country {
        Some(country) => {
            ensure!(countries.contains(country), "Unknown country: {country}");
            country.clone()
        }
        None if args.interactive => Select::new("Country", countries)
            .prompt()
            .context("Country selection cancelled")?,
        None => bail!("--country is required when not running interactively"),
    };

    let labels = LevelLabels::for_country(&country);
    let region = match selectable_regions(records, &country) {
        Ok(choices) => Some(choose_area(
            labels.region,
            choices,
            args.region.as_deref(),
            args.interactive,
        )?),
        Err(err) => {
            if args.region.is_some() {
                warn!(%err, "ignoring --region");
            }
            None
        }
    };

    let sub_region = match &region {
        Some(area) => match selectable_sub_regions(records, &country, area) {
            Ok(choices) => Some(choose_area(
                labels.sub_region,
                choices,
                args.sub_region.as_deref(),
                args.interactive,
            )?),
            Err(err) => {
                debug!(%err, "sub-region level omitted");
                None
            }
        },
        None => None,
    };

    Ok(GeographicSelection::new(country, region, sub_region))
}

fn choose_area(
    label: &str,
    choices: Vec<String>,
    given: Option<&str>,
    interactive: bool,
) -> Result<Area> {
    let choice = match given {
        Some(given) => {
            ensure!(
                choices.iter().any(|c| c == given),
                "Unknown {}: {given}",
                label.to_lowercase()
            );
            given.to_string()
        }
        None if interactive => Select::new(label, choices)
            .prompt()
            .with_context(|| format!("{label} selection cancelled"))?,
        None => ALL.to_string(),
    };
    Ok(Area::from_choice(&choice))
}

fn prompt_percent(message: &str, default: u8) -> Result<u8> {
    CustomType::<u8>::new(message)
        .with_default(default)
        .with_error_message("Please enter a whole number")
        .with_validator(|value: &u8| {
            Ok(if (1..=100).contains(value) {
                Validation::Valid
            } else {
                Validation::Invalid("Must be between 1 and 100".into())
            })
        })
        .prompt()
        .with_context(|| format!("{message} prompt cancelled"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn records() -> Vec<DailyRecord> {
        let date = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        vec![
            DailyRecord::new(date, "US", Some("Texas".into()), Some("Travis".into()), 10, 1.0),
            DailyRecord::new(date, "US", Some("Texas".into()), Some("Harris".into()), 10, 1.0),
            DailyRecord::new(date, "France", None, None, 10, 1.0),
        ]
    }

    fn args(country: &str, region: Option<&str>, sub_region: Option<&str>) -> ModelArgs {
        ModelArgs {
            country: Some(country.to_string()),
            region: region.map(str::to_string),
            sub_region: sub_region.map(str::to_string),
            detection_rate: None,
            efficacy: None,
            format: Format::Text,
            series: None,
            interactive: false,
        }
    }

    #[test]
    fn test_choose_full_selection() {
        let selection =
            choose_selection(&records(), &args("US", Some("Texas"), Some("Travis"))).unwrap();
        assert_eq!(selection.location_label(), "Travis, Texas, US");
    }

    #[test]
    fn test_missing_levels_default_to_all() {
        let selection = choose_selection(&records(), &args("US", None, None)).unwrap();
        assert_eq!(selection.region(), Some(&Area::All));
        assert!(selection.sub_region().is_none());
    }

    #[test]
    fn test_level_without_choices_is_omitted() {
        let selection = choose_selection(&records(), &args("France", Some("Corsica"), None)).unwrap();
        assert!(selection.region().is_none());
        assert_eq!(selection.location_label(), "France");
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(choose_selection(&records(), &args("Atlantis", None, None)).is_err());
        assert!(choose_selection(&records(), &args("US", Some("Ohio"), None)).is_err());

        let mut no_country = args("US", None, None);
        no_country.country = None;
        assert!(choose_selection(&records(), &no_country).is_err());
    }
}
