use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
}

/// Parse a YYYY-MM month selector to the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&(s.to_string() + "-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

/// CLI month option: parse when given, default to the current month.
pub fn resolve_month(month: Option<&str>) -> AppResult<NaiveDate> {
    match month {
        Some(m) => parse_month(m),
        None => Ok(today()),
    }
}

pub fn weekday_short(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}
