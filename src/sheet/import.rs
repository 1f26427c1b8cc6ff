//! Spreadsheet import: pre-fill the month grid from an uploaded workbook.
//!
//! The sheet is anchored by a header row containing a cell exactly equal to
//! the configured name-column label. Columns right of it whose header parses
//! as a day number become day columns; employee rows are matched by exact
//! display name. The importer only parses; applying the result to a grid
//! session is the caller's job, so a failed import never writes anything.

use crate::core::grid::MonthGrid;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::models::work_norm::WorkNorm;
use calamine::{Data, Reader, open_workbook_auto};
use serde::Serialize;
use std::path::Path;

/// Result of a successful parse: the norms to upsert plus match statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub norms: Vec<WorkNorm>,
    /// Employees whose name was found in the sheet.
    pub matched: usize,
    /// Day columns recognised in the header row.
    pub day_columns: usize,
}

/// Parse an `.xlsx`/`.xls` workbook against the roster and the target month.
///
/// Fails with `NameColumnNotFound` when no header cell equals `name_label`,
/// and with `NoEmployeesMatched` when the sheet matches nobody. Individual
/// hour cells that are blank or non-numeric are read as 0, never as errors.
pub fn import_workbook(
    path: &Path,
    roster: &Roster,
    grid: &MonthGrid,
    name_label: &str,
) -> AppResult<ImportOutcome> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Sheet(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Sheet("the workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::Sheet(e.to_string()))?;

    let rows: Vec<&[Data]> = range.rows().collect();

    // 1. Locate the header row and the name column.
    let (header_row, name_col) = find_name_header(&rows, name_label)
        .ok_or_else(|| AppError::NameColumnNotFound(name_label.to_string()))?;

    // 2. Day columns: header cells right of the name column parsable as a
    //    day number that exists in the target month.
    let mut day_cols: Vec<(chrono::NaiveDate, usize)> = Vec::new();
    for (col, cell) in rows[header_row].iter().enumerate().skip(name_col + 1) {
        if let Some(n) = cell_as_int(cell)
            && (1..=31).contains(&n)
            && let Some(date) = grid.date_of(n as u32)
        {
            day_cols.push((date, col));
        }
    }

    // 3. Match roster employees to data rows and collect their day values.
    let mut norms = Vec::new();
    let mut matched = 0;

    for emp in roster.employees() {
        let data_row = rows
            .iter()
            .skip(header_row + 1)
            .find(|row| name_cell_matches(row, name_col, &emp.name));

        let Some(row) = data_row else {
            continue; // employees absent from the sheet stay untouched
        };
        matched += 1;

        for &(date, col) in &day_cols {
            let hours = row.get(col).map(cell_as_hours).unwrap_or(0.0);
            norms.push(WorkNorm::modified(emp.id, date, hours));
        }
    }

    if matched == 0 {
        return Err(AppError::NoEmployeesMatched);
    }

    Ok(ImportOutcome {
        norms,
        matched,
        day_columns: day_cols.len(),
    })
}

/// Scan rows top-down for the first cell exactly equal to the label.
fn find_name_header(rows: &[&[Data]], name_label: &str) -> Option<(usize, usize)> {
    for (ri, row) in rows.iter().enumerate() {
        let hit = row
            .iter()
            .position(|c| matches!(c, Data::String(s) if s == name_label));
        if let Some(ci) = hit {
            return Some((ri, ci));
        }
    }
    None
}

/// Exact, case-sensitive name match; no normalization.
fn name_cell_matches(row: &[Data], name_col: usize, name: &str) -> bool {
    row.get(name_col)
        .is_some_and(|c| matches!(c, Data::String(s) if s == name))
}

fn cell_as_int(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => Some(*f as i64),
        Data::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Hour cells coerce to 0 when blank or unreadable.
fn cell_as_hours(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
