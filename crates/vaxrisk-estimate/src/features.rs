//! Model inputs derived from a resolved series and the vaccination tables.

use tracing::debug;
use vaxrisk_region::PopulationIndex;
use vaxrisk_types::{
    DataShapeError, DomainError, GeographicSelection, RiskError, TimeWindowSeries,
    VaccinationRecord,
};

/// Days an individual stays infectious after a positive test.
pub const DEFAULT_INFECTIOUS_DURATION: usize = 10;

/// Computes the share of the population currently infectious.
///
/// New cases over the last `infectious_duration` days are divided by the most
/// recent population. The series must cover exactly `expected_window` days.
///
/// # Errors
///
/// Returns [`DataShapeError::WindowLength`] when the series has any other length,
/// and [`DomainError::ZeroPopulation`] when the latest population is zero.
pub fn extract_infection_rate(
    series: &TimeWindowSeries,
    infectious_duration: usize,
    expected_window: usize,
) -> Result<f64, RiskError> {
    series.ensure_window(expected_window)?;

    let latest = series
        .latest()
        .ok_or_else(|| DataShapeError::EmptySelection {
            location: series.selection.location_label(),
        })?;
    if latest.population == 0 {
        return Err(DomainError::ZeroPopulation {
            location: series.selection.location_label(),
        }
        .into());
    }

    let active = series.trailing_new_cases(infectious_duration);
    let rate = active as f64 / latest.population as f64;
    debug!(active, population = latest.population, rate, "infection rate");
    Ok(rate)
}

/// Computes the fully vaccinated share of the selected population.
///
/// Vaccination rows are broken down by region only for the `domestic` country.
/// For a specific domestic region the region's rows and population are used;
/// otherwise the country's. Elsewhere only country-level rows count. When
/// several rows qualify the largest figure wins.
///
/// # Errors
///
/// Returns [`DomainError::NoVaccinationData`] when no row qualifies, and
/// [`DomainError::MissingPopulation`] or [`DomainError::ZeroPopulation`] when the
/// population at that granularity is unknown or zero.
pub fn extract_vaccination_rate(
    vaccinations: &[VaccinationRecord],
    selection: &GeographicSelection,
    population: &PopulationIndex,
    domestic: &str,
) -> Result<f64, DomainError> {
    let country = selection.country_name();
    let is_domestic = country == domestic;
    let region = if is_domestic {
        selection.region_name()
    } else {
        None
    };
    let location = match region {
        Some(region) => format!("{region}, {country}"),
        None => country.to_string(),
    };

    let vaccinated = vaccinations
        .iter()
        .filter(|v| v.country == country)
        .filter(|v| match region {
            Some(region) => v.region.as_deref() == Some(region),
            None => is_domestic || v.is_country_level(),
        })
        .map(|v| v.people_fully_vaccinated)
        .max()
        .ok_or_else(|| DomainError::NoVaccinationData {
            location: location.clone(),
        })?;

    let people = population
        .lookup(country, region)
        .ok_or_else(|| DomainError::MissingPopulation {
            location: location.clone(),
        })?;
    if people == 0 {
        return Err(DomainError::ZeroPopulation { location });
    }

    let rate = vaccinated as f64 / people as f64;
    debug!(%location, vaccinated, people, rate, "vaccination rate");
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, TimeDelta};
    use vaxrisk_types::{Area, DailyRecord, SeriesPoint};

    fn series(len: usize, population: u64) -> TimeWindowSeries {
        let start = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        let points = (0..len)
            .map(|i| SeriesPoint {
                date: start + TimeDelta::days(i as i64),
                confirmed_cases: 10_000 + 100 * i as u64,
                population,
                incidence_rate: 0.0,
                new_cases: 100,
                new_cases_rolling_mean: None,
            })
            .collect();
        TimeWindowSeries::new(GeographicSelection::country("US"), points)
    }

    #[test]
    fn test_infection_rate() {
        let rate = extract_infection_rate(&series(14, 1_000_000), 10, 14).unwrap();
        assert_relative_eq!(rate, 0.001);
    }

    #[test]
    fn test_window_gate() {
        for len in [13, 15] {
            let err = extract_infection_rate(&series(len, 1_000_000), 10, 14).unwrap_err();
            assert_eq!(
                err,
                RiskError::DataShape(DataShapeError::WindowLength {
                    expected: 14,
                    actual: len,
                })
            );
        }
        assert!(extract_infection_rate(&series(14, 1_000_000), 10, 14).is_ok());
    }

    #[test]
    fn test_zero_population() {
        let err = extract_infection_rate(&series(14, 0), 10, 14).unwrap_err();
        assert!(err.is_domain());
    }

    fn vaccinations() -> Vec<VaccinationRecord> {
        vec![
            VaccinationRecord::new("US", Some("Texas".into()), 300, None),
            VaccinationRecord::new("US", Some("Texas".into()), 350, None),
            VaccinationRecord::new("US", Some("Ohio".into()), 200, None),
            VaccinationRecord::new("US", None, 600, None),
            VaccinationRecord::new("United Kingdom", None, 700, None),
            VaccinationRecord::new("United Kingdom", Some("England".into()), 900, None),
        ]
    }

    fn population() -> PopulationIndex {
        let date = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        // Population = confirmed * 100 at an incidence of 1000 per 100k.
        let records = vec![
            DailyRecord::new(date, "US", Some("Texas".into()), None, 5, 1000.0),
            DailyRecord::new(date, "US", Some("Ohio".into()), None, 5, 1000.0),
            DailyRecord::new(date, "United Kingdom", Some("England".into()), None, 10, 1000.0),
        ];
        PopulationIndex::from_records(&records)
    }

    #[test]
    fn test_domestic_region_uses_region_rows() {
        let selection = GeographicSelection::new("US", Some(Area::Named("Texas".into())), None);
        let rate = extract_vaccination_rate(&vaccinations(), &selection, &population(), "US")
            .unwrap();
        assert_relative_eq!(rate, 0.7);
    }

    #[test]
    fn test_domestic_country_takes_largest_row() {
        let selection = GeographicSelection::country("US");
        let rate = extract_vaccination_rate(&vaccinations(), &selection, &population(), "US")
            .unwrap();
        assert_relative_eq!(rate, 0.6);
    }

    #[test]
    fn test_foreign_country_ignores_region_rows() {
        let selection =
            GeographicSelection::new("United Kingdom", Some(Area::Named("England".into())), None);
        let rate = extract_vaccination_rate(&vaccinations(), &selection, &population(), "US")
            .unwrap();
        assert_relative_eq!(rate, 0.7);
    }

    #[test]
    fn test_missing_data() {
        let selection = GeographicSelection::country("France");
        assert_eq!(
            extract_vaccination_rate(&vaccinations(), &selection, &population(), "US"),
            Err(DomainError::NoVaccinationData {
                location: "France".into()
            })
        );

        let selection = GeographicSelection::new("US", Some(Area::Named("Ohio".into())), None);
        let rate = extract_vaccination_rate(&vaccinations(), &selection, &population(), "US")
            .unwrap();
        assert_relative_eq!(rate, 0.4);

        let selection = GeographicSelection::country("US");
        assert_eq!(
            extract_vaccination_rate(&vaccinations(), &selection, &PopulationIndex::default(), "US"),
            Err(DomainError::MissingPopulation {
                location: "US".into()
            })
        );
    }
}
