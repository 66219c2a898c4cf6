//! Trailing 12-month window anchored at the dataset's latest observation.

use chrono::{Months, NaiveDate};

/// Length of the trailing window in calendar months.
pub const TRAILING_WINDOW_MONTHS: u32 = 12;

/// Inclusive date range `[start, end]` ending at the latest observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TrailingWindow {
    /// Window of `TRAILING_WINDOW_MONTHS` ending at `latest`.
    ///
    /// Subtracts calendar months, clamping the day to the end of a shorter
    /// month (2016-02-29 gives 2015-02-28). Returns None only when the
    /// result would fall before chrono's minimum date.
    pub fn ending_at(latest: NaiveDate) -> Option<Self> {
        let start = latest.checked_sub_months(Months::new(TRAILING_WINDOW_MONTHS))?;
        Some(Self { start, end: latest })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_same_day_previous_year() {
        let w = TrailingWindow::ending_at(date(2017, 8, 23)).unwrap();
        assert_eq!(w.start, date(2016, 8, 23));
        assert_eq!(w.end, date(2017, 8, 23));
    }

    #[test]
    fn test_window_leap_day_clamps() {
        let w = TrailingWindow::ending_at(date(2016, 2, 29)).unwrap();
        assert_eq!(w.start, date(2015, 2, 28));
    }

    #[test]
    fn test_window_month_end() {
        let w = TrailingWindow::ending_at(date(2017, 3, 31)).unwrap();
        assert_eq!(w.start, date(2016, 3, 31));
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let w = TrailingWindow::ending_at(date(2017, 8, 23)).unwrap();
        assert!(w.contains(date(2016, 8, 23)));
        assert!(w.contains(date(2017, 8, 23)));
        assert!(!w.contains(date(2016, 8, 22)));
        assert!(!w.contains(date(2017, 8, 24)));
    }

    #[test]
    fn test_window_underflow() {
        assert!(TrailingWindow::ending_at(NaiveDate::MIN).is_none());
    }
}
