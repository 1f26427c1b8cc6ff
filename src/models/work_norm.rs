use chrono::NaiveDate;
use serde::Serialize;

/// The hours value assigned to one employee for one calendar day.
///
/// Uniqueness key is (employee_id, date): writing a norm for an existing key
/// replaces the previous entry, there is no history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkNorm {
    pub employee_id: u32,
    pub date: NaiveDate,
    pub hours: f64,
    /// Set when the value was changed during the current edit session
    /// (manual edit or spreadsheet import); used only for highlighting.
    pub modified: bool,
}

impl WorkNorm {
    pub fn new(employee_id: u32, date: NaiveDate, hours: f64) -> Self {
        Self {
            employee_id,
            date,
            hours,
            modified: false,
        }
    }

    pub fn modified(employee_id: u32, date: NaiveDate, hours: f64) -> Self {
        Self {
            employee_id,
            date,
            hours,
            modified: true,
        }
    }
}
