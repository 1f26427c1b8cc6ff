//! Terminal rendering of the month grid.
//!
//! One row per employee grouped by shift, one column per day with the weekday
//! under the day number, a total column. Weekend day headers carry the
//! configured marker; cells touched in the current edit session carry a `*`.

use crate::core::session::GridSession;
use crate::models::employee::{Employee, Roster};
use crate::store::NormStore;
use crate::utils::date::weekday_short;
use crate::utils::formatting::format_hours;
use crate::utils::table::Table;

fn shift_label(shift: u8) -> String {
    if shift == 0 {
        "Unassigned".to_string()
    } else {
        format!("Shift {}", shift)
    }
}

fn grid_table<S: NormStore>(session: &GridSession<S>, weekend_marker: &str) -> Table {
    let grid = session.grid();

    let mut headers = vec!["employee".to_string()];
    let mut subheaders = vec![String::new()];
    for gd in grid.days() {
        let mark = if gd.weekend { weekend_marker } else { "" };
        headers.push(format!("{}{}", gd.day, mark));
        subheaders.push(weekday_short(gd.weekday).to_string());
    }
    headers.push("total".to_string());
    subheaders.push(String::new());

    Table::new(headers).with_subheader(subheaders)
}

fn employee_cells<S: NormStore>(session: &GridSession<S>, emp: &Employee) -> Vec<String> {
    let mut row = vec![emp.name.clone()];
    let mut total = 0.0;

    for gd in session.grid().days() {
        let hours = session.get_hours(emp.id, gd.day);
        total += hours;

        let mark = if session.is_modified(emp.id, gd.day) {
            "*"
        } else {
            ""
        };
        row.push(format!("{}{}", format_hours(hours), mark));
    }

    row.push(format_hours(total));
    row
}

/// Render the full grid for the roster.
pub fn render_grid<S: NormStore>(
    session: &GridSession<S>,
    roster: &Roster,
    weekend_marker: &str,
) -> String {
    let mut table = grid_table(session, weekend_marker);

    for (shift, members) in roster.grouped_by_shift() {
        table.add_section(shift_label(shift));
        for emp in members {
            table.add_row(employee_cells(session, emp));
        }
    }

    table.render()
}

/// Render a single employee's row (used by `set`).
pub fn render_employee_row<S: NormStore>(
    session: &GridSession<S>,
    emp: &Employee,
    weekend_marker: &str,
) -> String {
    let mut table = grid_table(session, weekend_marker);
    table.add_row(employee_cells(session, emp));
    table.render()
}
