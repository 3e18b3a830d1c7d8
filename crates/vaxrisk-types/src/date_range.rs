//! Date range and day iteration.

use chrono::{NaiveDate, TimeDelta};

use crate::DateRangeError;

/// An inclusive range of report dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the trailing window used for rate computations.
    ///
    /// The window ends yesterday (today's report is not published yet) and spans
    /// `modeling_days + 1` days: the extra leading day only feeds the first
    /// day-over-day difference.
    ///
    /// # Errors
    ///
    /// Returns an error if `modeling_days` is zero.
    pub fn trailing(today: NaiveDate, modeling_days: usize) -> Result<Self, DateRangeError> {
        if modeling_days == 0 {
            return Err(DateRangeError::EmptyWindow);
        }
        let end = today - TimeDelta::days(1);
        let start = end - TimeDelta::days(modeling_days as i64);
        Self::new(start, end)
    }

    /// Returns an iterator over all days in the range.
    pub fn days(&self) -> DayIterator {
        DayIterator::new(self.start, self.end)
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over all days in a date range.
#[derive(Debug, Clone)]
pub struct DayIterator {
    current: NaiveDate,
    end: NaiveDate,
}

impl DayIterator {
    const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            current: start,
            end,
        }
    }
}

impl Iterator for DayIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }

        let result = self.current;
        self.current = self.current.succ_opt()?;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current > self.end {
            return (0, Some(0));
        }
        let days = (self.end - self.current).num_days() as usize + 1;
        (days, Some(days))
    }
}

impl ExactSizeIterator for DayIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new(date(2022, 1, 1), date(2022, 1, 31)).unwrap();
        assert_eq!(range.total_days(), 31);
    }

    #[test]
    fn test_date_range_invalid() {
        assert!(DateRange::new(date(2022, 1, 31), date(2022, 1, 1)).is_err());
    }

    #[test]
    fn test_trailing_window_covers_fifteen_days() {
        let range = DateRange::trailing(date(2022, 3, 16), 14).unwrap();

        assert_eq!(range.end, date(2022, 3, 15));
        assert_eq!(range.start, date(2022, 3, 1));
        assert_eq!(range.total_days(), 15);
        assert!(!range.contains(date(2022, 3, 16)));
    }

    #[test]
    fn test_trailing_window_rejects_zero_days() {
        assert_eq!(
            DateRange::trailing(date(2022, 3, 16), 0),
            Err(DateRangeError::EmptyWindow)
        );
    }

    #[test]
    fn test_day_iterator_crosses_month_boundary() {
        let range = DateRange::new(date(2022, 2, 27), date(2022, 3, 2)).unwrap();
        let days: Vec<_> = range.days().collect();

        assert_eq!(days.len(), 4);
        assert_eq!(range.days().len(), 4);
        assert_eq!(days[2], date(2022, 3, 1));
    }
}
