//! List command implementation.
//!
//! Prints the location choices of the current data, the same lists the model
//! page offers.

use anyhow::Result;
use vaxrisk_lib::prelude::*;
use vaxrisk_lib::{LevelLabels, PINNED_COUNTRIES, selectable_regions, selectable_sub_regions};

use crate::session::Session;

/// List the countries of the current data, pinned countries first.
pub(crate) async fn list_countries(session: &Session) -> Result<()> {
    let dataset = session.dataset().await?;
    let countries = vaxrisk_lib::list_countries(&dataset.cases, &PINNED_COUNTRIES);

    if countries.is_empty() {
        println!("No countries found.");
        return Ok(());
    }
    for country in &countries {
        println!("{country}");
    }
    println!("\nTotal: {} countries", countries.len());
    Ok(())
}

/// List the regions of `country`, or the sub-regions of `region`.
pub(crate) async fn list_regions(
    session: &Session,
    country: &str,
    region: Option<&str>,
) -> Result<()> {
    let dataset = session.dataset().await?;
    let labels = LevelLabels::for_country(country);

    let (label, choices) = match region {
        None => (labels.region, selectable_regions(&dataset.cases, country)),
        Some(region) => (
            labels.sub_region,
            selectable_sub_regions(&dataset.cases, country, &Area::from_choice(region)),
        ),
    };

    match choices {
        Ok(choices) => {
            println!("{label}");
            println!("{}", "-".repeat(label.len().max(20)));
            for choice in &choices {
                println!("{choice}");
            }
        }
        Err(err) => println!("No {} choices: {err}", label.to_lowercase()),
    }
    Ok(())
}
