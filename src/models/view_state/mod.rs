// View state module
// The month currently shown by the calendar

use chrono::{Datelike, Local, NaiveDate};

/// The year and zero-based month on screen.
///
/// Values are immutable; navigation returns a new `ViewState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewState {
    year: i32,
    month0: u32,
}

impl ViewState {
    /// Build a view from a year and a zero-based month index.
    ///
    /// Out-of-range month indexes roll over into the neighbouring years, so
    /// `ViewState::new(2024, -1)` is December 2023 and `ViewState::new(2024, 12)`
    /// is January 2025.
    pub fn new(year: i32, month_index: i32) -> Self {
        let total = year * 12 + month_index;
        Self {
            year: total.div_euclid(12),
            month0: total.rem_euclid(12) as u32,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January)
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month (1 = January), as used on the wire
    pub fn month_one_based(&self) -> u32 {
        self.month0 + 1
    }

    pub fn shift(&self, delta_months: i32) -> Self {
        Self::new(self.year, self.month0 as i32 + delta_months)
    }

    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_one_based(), 1).unwrap_or(NaiveDate::MIN)
    }

    /// Long month name and year, e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_from_january_wraps_year() {
        let view = ViewState::new(2024, 0).previous();
        assert_eq!((view.year(), view.month0()), (2023, 11));
    }

    #[test]
    fn test_next_from_december_wraps_year() {
        let view = ViewState::new(2024, 11).next();
        assert_eq!((view.year(), view.month0()), (2025, 0));
    }

    #[test]
    fn test_new_normalizes_large_offsets() {
        assert_eq!(ViewState::new(2024, 25), ViewState::new(2026, 1));
        assert_eq!(ViewState::new(2024, -13), ViewState::new(2022, 11));
    }

    #[test]
    fn test_navigation_returns_new_value() {
        let march = ViewState::new(2024, 2);
        let april = march.next();
        assert_eq!(march.month_one_based(), 3);
        assert_eq!(april.month_one_based(), 4);
    }

    #[test]
    fn test_title_uses_long_month_name() {
        assert_eq!(ViewState::new(2024, 2).title(), "March 2024");
        assert_eq!(ViewState::new(2023, 11).title(), "December 2023");
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let view = ViewState::from_date(date);
        assert_eq!(view.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }
}
