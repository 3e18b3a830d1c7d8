//! Resolution of a geographic selection into a per-day series.

use chrono::NaiveDate;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, warn};
use vaxrisk_types::{
    DailyRecord, DataShapeError, GeographicSelection, SeriesPoint, TimeWindowSeries,
};

/// Number of days in the rolling mean of new cases.
pub const ROLLING_WINDOW: usize = 7;

/// Totals of one report date.
#[derive(Debug, Default)]
struct DayTotals {
    confirmed: u64,
    population: u64,
    rows: usize,
    skipped: usize,
}

/// Resolves a selection into a per-day series.
///
/// Matching rows are grouped by date and summed. Each point carries the
/// cumulative incidence per 100k, the cases added since the previous day and a
/// trailing 7-day mean of those. The first day only serves as the baseline of the
/// differencing and is dropped, so `n` grouped days yield `n - 1` points.
///
/// Rows without a population still count towards the confirmed cases of their
/// day; only their population is missing from the total.
///
/// # Errors
///
/// Returns [`DataShapeError::EmptySelection`] if no row matches,
/// [`DataShapeError::MissingPopulation`] if a day has no row with a population, and
/// [`DataShapeError::TooShort`] if fewer than two days remain.
pub fn resolve_selection(
    records: &[DailyRecord],
    selection: &GeographicSelection,
) -> Result<TimeWindowSeries, DataShapeError> {
    let mut groups: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
    for record in records.iter().filter(|r| {
        selection.matches(&r.country, r.region.as_deref(), r.sub_region.as_deref())
    }) {
        let totals = groups.entry(record.date).or_default();
        totals.rows += 1;
        totals.confirmed = totals.confirmed.saturating_add(record.confirmed_cases);
        match record.population {
            Some(population) => {
                totals.population = totals.population.checked_add(population).ok_or(
                    DataShapeError::MissingPopulation { date: record.date },
                )?;
            }
            None => totals.skipped += 1,
        }
    }

    if groups.is_empty() {
        return Err(DataShapeError::EmptySelection {
            location: selection.location_label(),
        });
    }

    for (date, totals) in &groups {
        if totals.skipped == totals.rows || totals.population == 0 {
            return Err(DataShapeError::MissingPopulation { date: *date });
        }
        if totals.skipped > 0 {
            warn!(%date, skipped = totals.skipped, rows = totals.rows, "rows without population");
        }
    }

    if groups.len() < 2 {
        return Err(DataShapeError::TooShort {
            actual: groups.len(),
        });
    }

    let days: Vec<(NaiveDate, DayTotals)> = groups.into_iter().collect();
    let mut recent: VecDeque<i64> = VecDeque::with_capacity(ROLLING_WINDOW);
    let mut points = Vec::with_capacity(days.len() - 1);

    for pair in days.windows(2) {
        let (_, previous) = &pair[0];
        let (date, current) = &pair[1];

        let new_cases = current.confirmed as i64 - previous.confirmed as i64;
        if recent.len() == ROLLING_WINDOW {
            recent.pop_front();
        }
        recent.push_back(new_cases);
        let new_cases_rolling_mean = (recent.len() == ROLLING_WINDOW)
            .then(|| recent.iter().sum::<i64>() as f64 / ROLLING_WINDOW as f64);

        points.push(SeriesPoint {
            date: *date,
            confirmed_cases: current.confirmed,
            population: current.population,
            incidence_rate: current.confirmed as f64 / current.population as f64 * 1e5,
            new_cases,
            new_cases_rolling_mean,
        });
    }

    debug!(selection = %selection, days = points.len(), "selection resolved");
    Ok(TimeWindowSeries::new(selection.clone(), points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeDelta;
    use vaxrisk_types::{Area, NOT_REPORTED};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
    }

    fn record(
        day: i64,
        country: &str,
        region: Option<&str>,
        sub_region: Option<&str>,
        confirmed: u64,
        population: Option<u64>,
    ) -> DailyRecord {
        let mut record = DailyRecord::new(
            start() + TimeDelta::days(day),
            country,
            region.map(str::to_string),
            sub_region.map(str::to_string),
            confirmed,
            0.0,
        );
        record.population = population;
        record
    }

    /// Two Texas counties growing by 10 and 20 cases a day over `days` days.
    fn texas(days: i64) -> Vec<DailyRecord> {
        (0..days)
            .flat_map(|d| {
                [
                    record(d, "US", Some("Texas"), Some("Travis"), 1_000 + 10 * d as u64, Some(100_000)),
                    record(d, "US", Some("Texas"), Some("Harris"), 2_000 + 20 * d as u64, Some(300_000)),
                ]
            })
            .collect()
    }

    #[test]
    fn test_groups_and_differences() {
        let selection = GeographicSelection::new("US", Some(Area::Named("Texas".into())), None);
        let series = resolve_selection(&texas(4), &selection).unwrap();

        assert_eq!(series.len(), 3);
        let first = &series.points[0];
        assert_eq!(first.date, start() + TimeDelta::days(1));
        assert_eq!(first.confirmed_cases, 3_030);
        assert_eq!(first.population, 400_000);
        assert_eq!(first.new_cases, 30);
        assert_relative_eq!(first.incidence_rate, 757.5);
        assert!(series.points.iter().all(|p| p.new_cases_rolling_mean.is_none()));
    }

    #[test]
    fn test_unordered_input_is_sorted() {
        let mut records = texas(3);
        records.reverse();
        let series = resolve_selection(&records, &GeographicSelection::country("US")).unwrap();

        let dates: Vec<_> = series.points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![start() + TimeDelta::days(1), start() + TimeDelta::days(2)]
        );
    }

    #[test]
    fn test_rolling_mean_after_seven_days() {
        let selection = GeographicSelection::new(
            "US",
            Some(Area::Named("Texas".into())),
            Some(Area::Named("Travis".into())),
        );
        let series = resolve_selection(&texas(15), &selection).unwrap();

        assert_eq!(series.len(), 14);
        assert!(series.points[5].new_cases_rolling_mean.is_none());
        assert_relative_eq!(series.points[6].new_cases_rolling_mean.unwrap(), 10.0);
        assert_relative_eq!(series.points[13].new_cases_rolling_mean.unwrap(), 10.0);
    }

    #[test]
    fn test_revisions_give_negative_new_cases() {
        let records = vec![
            record(0, "France", None, None, 500, Some(1_000_000)),
            record(1, "France", None, None, 480, Some(1_000_000)),
        ];
        let series = resolve_selection(&records, &GeographicSelection::country("France")).unwrap();
        assert_eq!(series.points[0].new_cases, -20);
    }

    #[test]
    fn test_empty_selection() {
        let selection = GeographicSelection::new("US", Some(Area::Named("Ohio".into())), None);
        assert_eq!(
            resolve_selection(&texas(3), &selection),
            Err(DataShapeError::EmptySelection {
                location: "Ohio, US".into()
            })
        );
    }

    #[test]
    fn test_day_without_population() {
        let mut records = texas(3);
        for record in records.iter_mut().filter(|r| r.date == start()) {
            record.population = None;
        }
        assert_eq!(
            resolve_selection(&records, &GeographicSelection::country("US")),
            Err(DataShapeError::MissingPopulation { date: start() })
        );
    }

    #[test]
    fn test_rows_without_population_keep_their_cases() {
        let selection = GeographicSelection::new("US", Some(Area::Named("Texas".into())), None);
        let records: Vec<DailyRecord> = (0..3)
            .flat_map(|d| {
                [
                    record(d, "US", Some("Texas"), Some("Travis"), 1_000 + 10 * d as u64, Some(100_000)),
                    record(d, "US", Some("Texas"), Some("Unassigned"), 500 + 50 * d as u64, None),
                ]
            })
            .collect();

        let series = resolve_selection(&records, &selection).unwrap();
        let first = &series.points[0];
        assert_eq!(first.confirmed_cases, 1_560);
        assert_eq!(first.new_cases, 60);
        assert_eq!(first.population, 100_000);
        assert_relative_eq!(first.incidence_rate, 1_560.0);
    }

    #[test]
    fn test_population_overflow_is_missing_population() {
        let records = vec![
            record(0, "US", Some("Texas"), Some("Travis"), 10, Some(u64::MAX)),
            record(0, "US", Some("Texas"), Some("Harris"), 10, Some(1)),
            record(1, "US", Some("Texas"), Some("Travis"), 20, Some(100)),
        ];
        assert_eq!(
            resolve_selection(&records, &GeographicSelection::country("US")),
            Err(DataShapeError::MissingPopulation { date: start() })
        );
    }

    #[test]
    fn test_single_day_is_too_short() {
        assert_eq!(
            resolve_selection(&texas(1), &GeographicSelection::country("US")),
            Err(DataShapeError::TooShort { actual: 1 })
        );
    }

    #[test]
    fn test_not_reported_selects_missing_region() {
        let records = vec![
            record(0, "United Kingdom", None, None, 100, Some(10_000)),
            record(1, "United Kingdom", None, None, 150, Some(10_000)),
            record(0, "United Kingdom", Some("England"), None, 900, Some(50_000)),
            record(1, "United Kingdom", Some("England"), None, 990, Some(50_000)),
        ];
        let selection = GeographicSelection::new(
            "United Kingdom",
            Some(Area::from_choice(NOT_REPORTED)),
            None,
        );

        let series = resolve_selection(&records, &selection).unwrap();
        assert_eq!(series.points[0].new_cases, 50);
        assert_eq!(series.points[0].population, 10_000);
    }
}
