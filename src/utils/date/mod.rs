// Date utility functions
// Month arithmetic shared by the grid layout and navigation

use chrono::{Datelike, NaiveDate};

/// Number of days in `month` (1-12) of `year`, leap years included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday of the first of the month, 0 = Sunday through 6 = Saturday
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// ISO `YYYY-MM-DD` key for a date
pub fn iso_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
