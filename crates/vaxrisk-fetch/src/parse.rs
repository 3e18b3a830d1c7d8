//! CSV parsing of daily reports and vaccination tables.

use chrono::NaiveDate;
use csv_async::{AsyncReaderBuilder, Trim};
use futures::StreamExt;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use vaxrisk_types::{DailyRecord, VaccinationRecord};

/// Errors that can occur while parsing a snapshot.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// The file parsed but produced no usable rows.
    #[error("No usable rows in {0}")]
    Empty(String),
}

/// Daily report columns used by the pipeline.
#[derive(Debug, Deserialize)]
struct DailyReportRow {
    #[serde(rename = "Admin2", default)]
    admin2: Option<String>,
    #[serde(rename = "Province_State", alias = "Province/State", default)]
    province_state: Option<String>,
    #[serde(rename = "Country_Region", alias = "Country/Region", default)]
    country_region: Option<String>,
    #[serde(rename = "Confirmed", default)]
    confirmed: Option<f64>,
    #[serde(rename = "Incident_Rate", alias = "Incidence_Rate", default)]
    incident_rate: Option<f64>,
}

impl DailyReportRow {
    fn into_record(self, date: NaiveDate) -> Option<DailyRecord> {
        let country = self.country_region?;
        let confirmed = self.confirmed.filter(|c| c.is_finite() && *c >= 0.0)?;
        Some(DailyRecord::new(
            date,
            country,
            self.province_state,
            self.admin2,
            confirmed as u64,
            self.incident_rate.unwrap_or(0.0),
        ))
    }
}

/// Vaccination table columns; the domestic and global tables differ in case.
#[derive(Debug, Deserialize)]
struct VaccinationRow {
    #[serde(rename = "Country_Region", default)]
    country_region: Option<String>,
    #[serde(rename = "Province_State", default)]
    province_state: Option<String>,
    #[serde(
        rename = "People_Fully_Vaccinated",
        alias = "People_fully_vaccinated",
        default
    )]
    people_fully_vaccinated: Option<f64>,
    #[serde(rename = "Report_Date", alias = "Date", default)]
    report_date: Option<String>,
}

impl VaccinationRow {
    fn into_record(self) -> Option<VaccinationRecord> {
        let country = self.country_region?;
        let fully = self
            .people_fully_vaccinated
            .filter(|v| v.is_finite() && *v >= 0.0)?;
        let as_of = self.report_date.as_deref().and_then(parse_report_date);
        Some(VaccinationRecord::new(
            country,
            self.province_state,
            fully as u64,
            as_of,
        ))
    }
}

/// Parses the leading `YYYY-MM-DD` of a report date, ignoring any time part.
fn parse_report_date(value: &str) -> Option<NaiveDate> {
    let day = value.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Parses a daily case report.
///
/// Rows without a country or without a confirmed count are skipped. A missing
/// incidence rate leaves the record's population undefined.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or yields no usable rows.
pub async fn parse_daily_report(
    date: NaiveDate,
    data: &[u8],
) -> Result<Vec<DailyRecord>, ParseError> {
    let mut reader = AsyncReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .create_deserializer(data);
    let mut rows = reader.deserialize::<DailyReportRow>();

    let mut records = Vec::new();
    let mut skipped = 0usize;
    while let Some(row) = rows.next().await {
        match row?.into_record(date) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(%date, rows = records.len(), skipped, "parsed daily report");
    if records.is_empty() {
        return Err(ParseError::Empty(format!("daily report {date}")));
    }
    Ok(records)
}

/// Parses a vaccination table.
///
/// Rows without a country or without a fully-vaccinated count are skipped.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or yields no usable rows.
pub async fn parse_vaccinations(data: &[u8]) -> Result<Vec<VaccinationRecord>, ParseError> {
    let mut reader = AsyncReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .create_deserializer(data);
    let mut rows = reader.deserialize::<VaccinationRow>();

    let mut records = Vec::new();
    let mut skipped = 0usize;
    while let Some(row) = rows.next().await {
        match row?.into_record() {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(rows = records.len(), skipped, "parsed vaccination table");
    if records.is_empty() {
        return Err(ParseError::Empty("vaccination table".to_string()));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY: &str = "\
FIPS,Admin2,Province_State,Country_Region,Last_Update,Lat,Long_,Confirmed,Deaths,Recovered,Active,Combined_Key,Incident_Rate,Case_Fatality_Ratio
48453,Travis,Texas,US,2022-03-16 04:20:58,30.33,-97.78,5000,10,,,\"Travis, Texas, US\",400.0,0.2
,,,France,2022-03-16 04:20:58,46.2,2.2,1000,1,,,France,10.0,0.1
,,Unknown,Canada,2022-03-16 04:20:58,,,25,0,,,\"Unknown, Canada\",,0.0
,,Nowhere,,2022-03-16 04:20:58,,,25,0,,,Nowhere,,0.0
,,Ghost,Atlantis,2022-03-16 04:20:58,,,,0,,,Ghost,,0.0
";

    const GLOBAL: &str = "\
Country_Region,Date,Doses_admin,People_partially_vaccinated,People_fully_vaccinated,Report_Date_String,UID,Province_State
France,2022-03-15,140000000,54000000,52000000.0,2022-03-15,250,
US,2022-03-15,560000000,254000000,217000000,2022-03-15,840,
Canada,2022-03-15,80000000,32000000,,2022-03-15,124,
";

    const DOMESTIC: &str = "\
FIPS,Province_State,Country_Region,People_Fully_Vaccinated,People_Partially_Vaccinated,Report_Date,UID
48,Texas,US,17000000,20000000,2022-03-15 10:00:00,84000048
";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_parse_daily_report() {
        let records = parse_daily_report(date(), DAILY.as_bytes()).await.unwrap();

        assert_eq!(records.len(), 3);
        let travis = &records[0];
        assert_eq!(travis.country, "US");
        assert_eq!(travis.region.as_deref(), Some("Texas"));
        assert_eq!(travis.sub_region.as_deref(), Some("Travis"));
        assert_eq!(travis.confirmed_cases, 5000);
        assert_eq!(travis.population, Some(1_250_000));
        assert_eq!(travis.date, date());

        let france = &records[1];
        assert_eq!(france.region, None);
        assert_eq!(france.population, Some(10_000_000));

        // Missing incidence rate: population undefined, row kept.
        assert_eq!(records[2].population, None);
    }

    #[tokio::test]
    async fn test_parse_legacy_incidence_column() {
        let csv = "Admin2,Province_State,Country_Region,Confirmed,Incidence_Rate\n,,Peru,200,20.0\n";
        let records = parse_daily_report(date(), csv.as_bytes()).await.unwrap();
        assert_eq!(records[0].population, Some(1_000_000));
    }

    #[tokio::test]
    async fn test_parse_empty_report() {
        let csv = "Admin2,Province_State,Country_Region,Confirmed,Incident_Rate\n";
        let result = parse_daily_report(date(), csv.as_bytes()).await;
        assert!(matches!(result, Err(ParseError::Empty(_))));
    }

    #[tokio::test]
    async fn test_parse_global_vaccinations() {
        let records = parse_vaccinations(GLOBAL.as_bytes()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "France");
        assert!(records[0].is_country_level());
        assert_eq!(records[0].people_fully_vaccinated, 52_000_000);
        assert_eq!(records[0].as_of, Some(date()));
    }

    #[tokio::test]
    async fn test_parse_domestic_vaccinations() {
        let records = parse_vaccinations(DOMESTIC.as_bytes()).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region.as_deref(), Some("Texas"));
        assert_eq!(records[0].people_fully_vaccinated, 17_000_000);
        assert_eq!(records[0].as_of, Some(date()));
    }

    #[test]
    fn test_parse_report_date() {
        assert_eq!(parse_report_date("2022-03-15"), Some(date()));
        assert_eq!(parse_report_date("2022-03-15 10:00:00"), Some(date()));
        assert_eq!(parse_report_date("03/15/22"), None);
    }
}
