//! Snapshot URL construction.

use chrono::NaiveDate;
use vaxrisk_types::VaccinationKind;

/// Base URL of the JHU CSSE daily report feed.
pub const DAILY_REPORTS_BASE_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_daily_reports";

/// Base URL of the JHU CCI vaccination tables.
pub const VACCINE_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/govex/COVID-19/master/data_tables/vaccine_data";

/// Date format used in daily report file names.
pub const REPORT_DATE_FORMAT: &str = "%m-%d-%Y";

/// Returns the file name of a daily report, e.g. `03-15-2022.csv`.
#[must_use]
pub fn report_file_name(date: NaiveDate) -> String {
    format!("{}.csv", date.format(REPORT_DATE_FORMAT))
}

/// Builds the URL of a daily report.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vaxrisk_fetch::url::daily_report_url;
///
/// let date = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
/// assert!(daily_report_url(date).ends_with("/csse_covid_19_daily_reports/03-15-2022.csv"));
/// ```
#[must_use]
pub fn daily_report_url(date: NaiveDate) -> String {
    format!("{}/{}", DAILY_REPORTS_BASE_URL, report_file_name(date))
}

/// Builds the URL of the latest vaccination table of the given kind.
#[must_use]
pub fn vaccination_url(kind: VaccinationKind) -> String {
    match kind {
        VaccinationKind::Domestic => format!(
            "{VACCINE_DATA_BASE_URL}/us_data/hourly/vaccine_people_vaccinated_US.csv"
        ),
        VaccinationKind::Global => {
            format!("{VACCINE_DATA_BASE_URL}/global_data/vaccine_data_global.csv")
        }
    }
}

/// Extracts the report date from a daily report URL or file name.
#[must_use]
pub fn report_date_from_url(url: &str) -> Option<NaiveDate> {
    let name = url.rsplit('/').next()?;
    let stem = name.strip_suffix(".csv")?;
    NaiveDate::parse_from_str(stem, REPORT_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_report_url() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
        assert_eq!(
            daily_report_url(date),
            "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_daily_reports/01-05-2022.csv"
        );
    }

    #[test]
    fn test_vaccination_urls() {
        assert!(vaccination_url(VaccinationKind::Domestic).ends_with("vaccine_people_vaccinated_US.csv"));
        assert!(vaccination_url(VaccinationKind::Global).ends_with("vaccine_data_global.csv"));
    }

    #[test]
    fn test_report_date_from_url() {
        let date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        assert_eq!(report_date_from_url(&daily_report_url(date)), Some(date));
        assert_eq!(report_date_from_url("12-31-2022.csv"), Some(date));
        assert_eq!(report_date_from_url("notes.txt"), None);
        assert_eq!(report_date_from_url("2022-12-31.csv"), None);
    }
}
