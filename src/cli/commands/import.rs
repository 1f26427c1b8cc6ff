use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::MonthGrid;
use crate::core::session::GridSession;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::sheet::import::import_workbook;
use crate::store::MemoryNormStore;
use crate::ui::grid_view::render_grid;
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Import a spreadsheet and report what was matched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, month, json } = cmd {
        let reference = date::resolve_month(month.as_deref())?;
        let roster = Roster::load(Path::new(&cfg.roster))?;

        let grid = MonthGrid::for_month(reference);
        let mut session = GridSession::new(grid, MemoryNormStore::new(), cfg.default_norm_hours);

        let outcome = import_workbook(
            Path::new(file),
            &roster,
            session.grid(),
            &cfg.name_column_label,
        )?;

        session.begin_edit();
        session.apply_import(&outcome)?;

        if *json {
            let report = serde_json::to_string_pretty(&outcome)
                .map_err(|e| AppError::Sheet(format!("report serialization error: {e}")))?;
            println!("{}", report);
        } else {
            success(format!(
                "Matched {} of {} employees across {} day columns.",
                outcome.matched,
                roster.len(),
                outcome.day_columns
            ));
            println!();
            print!("{}", render_grid(&session, &roster, &cfg.weekend_marker));
        }
    }
    Ok(())
}
