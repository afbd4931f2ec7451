use crate::utils::date::{days_in_month, first_weekday};

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Shape of a month before any events are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    /// Blank cells before day 1 (weekday index of the first)
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub num_rows: u32,
}

impl MonthLayout {
    /// `month` is one-based
    pub fn for_month(year: i32, month: u32) -> Self {
        let leading_blanks = first_weekday(year, month);
        let days_in_month = days_in_month(year, month);
        Self {
            leading_blanks,
            days_in_month,
            num_rows: row_count(leading_blanks, days_in_month),
        }
    }

    pub fn total_cells(&self) -> u32 {
        self.num_rows * 7
    }

    /// Blank cells after the last day, padding the final week
    pub fn trailing_blanks(&self) -> u32 {
        self.total_cells() - (self.leading_blanks + self.days_in_month)
    }
}

/// Weeks needed to show `days` starting at column `first_weekday`
pub fn row_count(first_weekday: u32, days: u32) -> u32 {
    (first_weekday + days).div_ceil(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_march_2024_layout() {
        let layout = MonthLayout::for_month(2024, 3);
        assert_eq!(layout.leading_blanks, 5);
        assert_eq!(layout.days_in_month, 31);
        assert_eq!(layout.num_rows, 6);
        assert_eq!(layout.trailing_blanks(), 6);
    }

    #[test]
    fn test_february_2015_fits_four_rows() {
        // Starts on a Sunday and has 28 days
        let layout = MonthLayout::for_month(2015, 2);
        assert_eq!(layout.leading_blanks, 0);
        assert_eq!(layout.num_rows, 4);
        assert_eq!(layout.trailing_blanks(), 0);
    }

    #[test]
    fn test_row_count_rounds_up() {
        assert_eq!(row_count(0, 28), 4);
        assert_eq!(row_count(1, 28), 5);
        assert_eq!(row_count(6, 31), 6);
    }
}
