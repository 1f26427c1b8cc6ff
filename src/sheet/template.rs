//! Template export: a blank timesheet workbook for manual or external filling.
//!
//! Pure serialization: title row, header row (shift, sequence, name label,
//! one column per day, total, role), one row per employee grouped by shift.
//! Day cells stay blank.

use crate::core::grid::MonthGrid;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::sheet::path_str;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const COL_SHIFT: u16 = 0;
const COL_SEQ: u16 = 1;
const COL_NAME: u16 = 2;
const FIRST_DAY_COL: u16 = 3;

/// Write the template workbook for the grid's month.
pub fn write_template(
    path: &Path,
    roster: &Roster,
    grid: &MonthGrid,
    name_label: &str,
    organization: &str,
) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let day_count = grid.day_count() as u16;
    let col_total = FIRST_DAY_COL + day_count;
    let col_role = col_total + 1;

    // ---------------------------
    // Title row
    // ---------------------------
    let title = if organization.is_empty() {
        format!("Timesheet for {}", grid.label())
    } else {
        format!("{}: timesheet for {}", organization, grid.label())
    };

    let title_format = Format::new().set_bold().set_font_size(12);
    worksheet
        .merge_range(0, 0, 0, col_role, &title, &title_format)
        .map_err(to_export_error)?;

    // ---------------------------
    // Header row
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let weekend_header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0xC0504D))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(1, COL_SHIFT, "shift", &header_format)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(1, COL_SEQ, "no.", &header_format)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(1, COL_NAME, name_label, &header_format)
        .map_err(to_export_error)?;

    for gd in grid.days() {
        let col = FIRST_DAY_COL + (gd.day - 1) as u16;
        let fmt = if gd.weekend {
            &weekend_header_format
        } else {
            &header_format
        };
        worksheet
            .write_with_format(1, col, gd.day as f64, fmt)
            .map_err(to_export_error)?;
    }

    worksheet
        .write_with_format(1, col_total, "total", &header_format)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(1, col_role, "role", &header_format)
        .map_err(to_export_error)?;

    worksheet.set_freeze_panes(2, FIRST_DAY_COL).ok();

    // ---------------------------
    // Employee rows, grouped by shift
    // ---------------------------
    let text_format = Format::new().set_border(FormatBorder::Thin);
    let num_format = Format::new()
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);
    let blank_format = Format::new().set_border(FormatBorder::Thin);

    let mut row: u32 = 2;
    let mut seq: u32 = 0;
    let mut name_width = UnicodeWidthStr::width(name_label);
    let mut role_width = UnicodeWidthStr::width("role");

    for (shift, members) in roster.grouped_by_shift() {
        for emp in members {
            seq += 1;

            worksheet
                .write_with_format(row, COL_SHIFT, shift as f64, &num_format)
                .map_err(to_export_error)?;
            worksheet
                .write_with_format(row, COL_SEQ, seq as f64, &num_format)
                .map_err(to_export_error)?;
            worksheet
                .write_with_format(row, COL_NAME, emp.name.as_str(), &text_format)
                .map_err(to_export_error)?;

            // Day cells are intentionally blank, only the grid border is drawn.
            for gd in grid.days() {
                let col = FIRST_DAY_COL + (gd.day - 1) as u16;
                worksheet
                    .write_blank(row, col, &blank_format)
                    .map_err(to_export_error)?;
            }

            match emp.hours_target {
                Some(target) => worksheet
                    .write_with_format(row, col_total, target, &num_format)
                    .map_err(to_export_error)?,
                None => worksheet
                    .write_blank(row, col_total, &blank_format)
                    .map_err(to_export_error)?,
            };

            worksheet
                .write_with_format(row, col_role, emp.role.as_str(), &text_format)
                .map_err(to_export_error)?;

            name_width = name_width.max(UnicodeWidthStr::width(emp.name.as_str()));
            role_width = role_width.max(UnicodeWidthStr::width(emp.role.as_str()));

            row += 1;
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    worksheet
        .set_column_width(COL_SHIFT, 6.0)
        .map_err(to_export_error)?;
    worksheet
        .set_column_width(COL_SEQ, 4.0)
        .map_err(to_export_error)?;
    worksheet
        .set_column_width(COL_NAME, name_width as f64 + 2.0)
        .map_err(to_export_error)?;
    for day_col in FIRST_DAY_COL..col_total {
        worksheet
            .set_column_width(day_col, 4.0)
            .map_err(to_export_error)?;
    }
    worksheet
        .set_column_width(col_total, 6.0)
        .map_err(to_export_error)?;
    worksheet
        .set_column_width(col_role, role_width as f64 + 2.0)
        .map_err(to_export_error)?;

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    Ok(())
}

/// Default output name, derived from the grid month.
pub fn default_template_name(grid: &MonthGrid) -> String {
    format!("timesheet_{:04}-{:02}.xlsx", grid.year(), grid.month())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
