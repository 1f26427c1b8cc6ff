//! Unified application error type.
//! All modules (core, sheet, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Day {0} is not part of the selected month")]
    InvalidDay(u32),

    #[error("Invalid hours value: {0} (expected a number between 0 and 24)")]
    InvalidHours(String),

    #[error("No employee matches '{0}' (use a roster id or the exact display name)")]
    UnknownEmployee(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Roster error: {0}")]
    Roster(String),

    // ---------------------------
    // Grid session errors
    // ---------------------------
    #[error("The grid is not in edit mode")]
    NotEditing,

    // ---------------------------
    // Spreadsheet import errors
    // ---------------------------
    #[error("No header cell labelled '{0}' found in the spreadsheet")]
    NameColumnNotFound(String),

    #[error("No roster employee matched any row of the spreadsheet")]
    NoEmployeesMatched,

    #[error("Spreadsheet error: {0}")]
    Sheet(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
