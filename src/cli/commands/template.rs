use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::MonthGrid;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::sheet::template::{default_template_name, write_template};
use crate::ui::messages::success;
use crate::utils::date;
use std::path::{Path, PathBuf};

/// Write a blank timesheet template workbook for the month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { month, file, force } = cmd {
        let reference = date::resolve_month(month.as_deref())?;
        let roster = Roster::load(Path::new(&cfg.roster))?;

        let grid = MonthGrid::for_month(reference);

        let out: PathBuf = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_template_name(&grid)),
        };

        if out.exists() && !force {
            return Err(AppError::Export(format!(
                "'{}' already exists (use --force to overwrite)",
                out.display()
            )));
        }

        write_template(
            &out,
            &roster,
            &grid,
            &cfg.name_column_label,
            &cfg.organization,
        )?;

        success(format!(
            "Template for {} written to {}.",
            grid.label(),
            out.display()
        ));
    }
    Ok(())
}
