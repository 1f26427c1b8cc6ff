use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::MonthGrid;
use crate::core::session::GridSession;
use crate::errors::AppResult;
use crate::models::employee::Roster;
use crate::sheet::import::import_workbook;
use crate::store::MemoryNormStore;
use crate::ui::grid_view::render_grid;
use crate::ui::messages::info;
use crate::utils::date;
use std::path::Path;

/// Render the grid for a month, optionally pre-filled from a spreadsheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, from } = cmd {
        let reference = date::resolve_month(month.as_deref())?;
        let roster = Roster::load(Path::new(&cfg.roster))?;

        let grid = MonthGrid::for_month(reference);
        let mut session = GridSession::new(grid, MemoryNormStore::new(), cfg.default_norm_hours);

        if let Some(file) = from {
            let outcome = import_workbook(
                Path::new(file),
                &roster,
                session.grid(),
                &cfg.name_column_label,
            )?;

            // Keep the session in edit mode so imported cells stay highlighted.
            session.begin_edit();
            session.apply_import(&outcome)?;

            info(format!(
                "Imported {} day columns for {} of {} employees.",
                outcome.day_columns,
                outcome.matched,
                roster.len()
            ));
        }

        println!("{}", session.grid().label());
        println!();
        print!("{}", render_grid(&session, &roster, &cfg.weekend_marker));
    }
    Ok(())
}
