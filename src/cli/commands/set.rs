use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::MonthGrid;
use crate::core::session::GridSession;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::store::MemoryNormStore;
use crate::ui::grid_view::render_employee_row;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_hours;
use std::path::Path;

/// One edit session: set a single cell, save, show the affected row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        month,
        employee,
        day,
        hours,
    } = cmd
    {
        let reference = date::resolve_month(month.as_deref())?;
        let roster = Roster::load(Path::new(&cfg.roster))?;

        let emp = roster
            .find(employee)
            .ok_or_else(|| AppError::UnknownEmployee(employee.clone()))?;

        let grid = MonthGrid::for_month(reference);
        let mut session = GridSession::new(grid, MemoryNormStore::new(), cfg.default_norm_hours);

        session.begin_edit();
        session.set_hours(emp.id, *day, *hours)?;

        success(format!(
            "Set {} hours for {} on day {} of {}.",
            format_hours(*hours),
            emp.name,
            day,
            session.grid().label()
        ));
        println!();
        print!("{}", render_employee_row(&session, emp, &cfg.weekend_marker));

        session.save();
    }
    Ok(())
}
