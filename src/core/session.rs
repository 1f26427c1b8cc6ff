//! The grid edit session: an in-memory work-norm store, an edit-mode flag and
//! the set of cells touched since the last save.
//!
//! Everything here is session-scoped. Saving merges nothing to disk; it only
//! leaves edit mode and clears the highlight set, the values stay in the store
//! until the process exits.

use crate::core::grid::MonthGrid;
use crate::errors::{AppError, AppResult};
use crate::models::work_norm::WorkNorm;
use crate::sheet::import::ImportOutcome;
use crate::store::NormStore;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    Viewing,
    Editing,
}

type CellKey = (u32, NaiveDate);

pub struct GridSession<S: NormStore> {
    grid: MonthGrid,
    store: S,
    modified: HashSet<CellKey>,
    mode: GridMode,
    default_hours: f64,
}

impl<S: NormStore> GridSession<S> {
    pub fn new(grid: MonthGrid, store: S, default_hours: f64) -> Self {
        Self {
            grid,
            store,
            modified: HashSet::new(),
            mode: GridMode::Viewing,
            default_hours,
        }
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn mode(&self) -> GridMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn begin_edit(&mut self) {
        self.mode = GridMode::Editing;
    }

    /// Leave edit mode and drop the highlight set. Edited values are already
    /// in the store, nothing is discarded.
    pub fn save(&mut self) {
        self.modified.clear();
        self.mode = GridMode::Viewing;
    }

    /// Write an hours value for one cell.
    ///
    /// Returns `Ok(false)` without touching anything when the session is not
    /// in edit mode. Repeated identical writes are idempotent; repeated
    /// different writes keep the last value.
    pub fn set_hours(&mut self, employee_id: u32, day: u32, hours: f64) -> AppResult<bool> {
        if self.mode != GridMode::Editing {
            return Ok(false);
        }

        if !(0.0..=24.0).contains(&hours) {
            return Err(AppError::InvalidHours(hours.to_string()));
        }

        let date = self
            .grid
            .date_of(day)
            .ok_or(AppError::InvalidDay(day))?;

        self.store.upsert(WorkNorm::modified(employee_id, date, hours));
        self.modified.insert((employee_id, date));

        Ok(true)
    }

    /// Stored hours for the cell, or the session default when no entry exists.
    pub fn get_hours(&self, employee_id: u32, day: u32) -> f64 {
        match self.grid.date_of(day) {
            Some(date) => self
                .store
                .get(employee_id, date)
                .map(|n| n.hours)
                .unwrap_or(self.default_hours),
            None => self.default_hours,
        }
    }

    pub fn is_modified(&self, employee_id: u32, day: u32) -> bool {
        self.grid
            .date_of(day)
            .is_some_and(|date| self.modified.contains(&(employee_id, date)))
    }

    /// Move the view one month forward; the highlight set does not carry over.
    pub fn next_month(&mut self) {
        self.grid = self.grid.next();
        self.modified.clear();
    }

    /// Move the view one month back; the highlight set does not carry over.
    pub fn prev_month(&mut self) {
        self.grid = self.grid.prev();
        self.modified.clear();
    }

    /// Apply a parsed spreadsheet import: upsert every norm and mark its cell.
    /// Requires edit mode, like manual cell edits.
    pub fn apply_import(&mut self, outcome: &ImportOutcome) -> AppResult<()> {
        if self.mode != GridMode::Editing {
            return Err(AppError::NotEditing);
        }

        for norm in &outcome.norms {
            self.modified.insert((norm.employee_id, norm.date));
            self.store.upsert(norm.clone());
        }

        Ok(())
    }
}
