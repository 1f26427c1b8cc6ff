//! Calendar geometry for the monthly grid.

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// One day column of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDay {
    /// Day-of-month number, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub weekend: bool,
}

/// The ordered day sequence of one calendar month.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    reference: NaiveDate,
    days: Vec<GridDay>,
}

impl MonthGrid {
    /// Build the grid for the month containing `reference`.
    pub fn for_month(reference: NaiveDate) -> Self {
        let first = reference.with_day(1).unwrap();

        let mut days = Vec::new();
        let mut d = first;
        while d.month() == first.month() {
            days.push(GridDay {
                day: d.day(),
                date: d,
                weekday: d.weekday(),
                weekend: matches!(d.weekday(), Weekday::Sat | Weekday::Sun),
            });
            d = d.succ_opt().unwrap();
        }

        Self { reference, days }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    pub fn days(&self) -> &[GridDay] {
        &self.days
    }

    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }

    /// Resolve a day number to its date within this month.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.day_count() {
            return None;
        }
        Some(self.days[(day - 1) as usize].date)
    }

    /// Grid for the following month (day-of-month clamped, e.g. Jan 31 → Feb 28).
    pub fn next(&self) -> Self {
        Self::for_month(self.reference + Months::new(1))
    }

    /// Grid for the previous month.
    pub fn prev(&self) -> Self {
        Self::for_month(self.reference - Months::new(1))
    }

    /// Human label, e.g. "March 2026".
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            crate::utils::date::month_name(self.month()),
            self.year()
        )
    }
}
