//! Selector choices for each geographic level.

use std::collections::BTreeSet;
use vaxrisk_types::{ALL, Area, DailyRecord, GeoLevel, NOT_REPORTED, SelectionError};

/// Country whose vaccination table is broken down by region.
pub const DOMESTIC_COUNTRY: &str = "US";

/// Countries listed ahead of the alphabetical remainder.
pub const PINNED_COUNTRIES: [&str; 2] = ["US", "United Kingdom"];

/// Selector labels for the two sub-national levels of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLabels {
    /// Label of the first-level subdivision.
    pub region: &'static str,
    /// Label of the second-level subdivision.
    pub sub_region: &'static str,
}

impl LevelLabels {
    /// Returns the labels used for `country`.
    #[must_use]
    pub fn for_country(country: &str) -> Self {
        if country == DOMESTIC_COUNTRY {
            Self {
                region: "State",
                sub_region: "County",
            }
        } else {
            Self {
                region: "Province/State",
                sub_region: "Sub-region",
            }
        }
    }
}

/// Lists every country in `records`.
///
/// Countries in `pinned` come first, in the given order, when present in the data;
/// the rest follow in lexical order.
#[must_use]
pub fn list_countries(records: &[DailyRecord], pinned: &[&str]) -> Vec<String> {
    let present: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();

    let mut countries: Vec<String> = Vec::with_capacity(present.len());
    for country in pinned {
        if present.contains(country) && !countries.iter().any(|c| c == country) {
            countries.push((*country).to_string());
        }
    }
    countries.extend(
        present
            .into_iter()
            .filter(|c| !pinned.contains(c))
            .map(str::to_string),
    );
    countries
}

/// Lists the region choices of `country`: `"All"` followed by the sorted regions.
///
/// A missing region is listed as `"Not Reported"`.
#[must_use]
pub fn list_regions(records: &[DailyRecord], country: &str) -> Vec<String> {
    with_all(
        records
            .iter()
            .filter(|r| r.country == country)
            .map(|r| r.region.as_deref()),
    )
}

/// Lists the sub-region choices of `region` in `country`.
///
/// Passing `"Not Reported"` as the region lists the sub-regions of rows without one.
#[must_use]
pub fn list_sub_regions(records: &[DailyRecord], country: &str, region: &str) -> Vec<String> {
    let area = Area::Named(region.to_string());
    with_all(
        records
            .iter()
            .filter(|r| r.country == country && area.matches(r.region.as_deref()))
            .map(|r| r.sub_region.as_deref()),
    )
}

/// Returns true if a list of choices is worth showing.
///
/// A list is valid when it has more than one entry, or exactly one entry that is
/// not `"Not Reported"`. An empty list is invalid.
#[must_use]
pub fn valid_regions(choices: &[String]) -> bool {
    match choices {
        [] => false,
        [only] => only != NOT_REPORTED,
        _ => true,
    }
}

/// Lists the region choices of `country` if the level should be shown.
///
/// Validity is judged on the named regions, without the leading `"All"`.
///
/// # Errors
///
/// Returns [`SelectionError::NoChoices`] when the region level should be omitted.
pub fn selectable_regions(
    records: &[DailyRecord],
    country: &str,
) -> Result<Vec<String>, SelectionError> {
    let choices = list_regions(records, country);
    if valid_regions(&choices[1..]) {
        Ok(choices)
    } else {
        Err(SelectionError::NoChoices {
            level: GeoLevel::Region,
            parent: country.to_string(),
        })
    }
}

/// Lists the sub-region choices under `region` if the level should be shown.
///
/// Only a specific region has sub-regions to choose from.
///
/// # Errors
///
/// Returns [`SelectionError::NoChoices`] when the sub-region level should be omitted.
pub fn selectable_sub_regions(
    records: &[DailyRecord],
    country: &str,
    region: &Area,
) -> Result<Vec<String>, SelectionError> {
    let no_choices = || SelectionError::NoChoices {
        level: GeoLevel::SubRegion,
        parent: format!("{region}, {country}"),
    };

    let name = region.name().ok_or_else(no_choices)?;
    let choices = list_sub_regions(records, country, name);
    if valid_regions(&choices[1..]) {
        Ok(choices)
    } else {
        Err(no_choices())
    }
}

fn with_all<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let unique: BTreeSet<&str> = values.map(|v| v.unwrap_or(NOT_REPORTED)).collect();
    std::iter::once(ALL)
        .chain(unique)
        .map(str::to_string)
        .collect()
}
