//! Table rendering for CLI outputs.
//!
//! Column widths are derived from content; the first column is left-aligned,
//! all others right-aligned. Section rows span the full table width and are
//! used for shift group separators.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

enum Row {
    Cells(Vec<String>),
    Section(String),
}

pub struct Table {
    headers: Vec<String>,
    subheaders: Option<Vec<String>>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            subheaders: None,
            rows: Vec::new(),
        }
    }

    /// Optional second header line (e.g. weekday names under day numbers).
    pub fn with_subheader(mut self, subheaders: Vec<String>) -> Self {
        self.subheaders = Some(subheaders);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row::Cells(row));
    }

    pub fn add_section(&mut self, label: String) {
        self.rows.push(Row::Section(label));
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        if let Some(sub) = &self.subheaders {
            for (i, s) in sub.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(s.as_str()));
                }
            }
        }

        for row in &self.rows {
            if let Row::Cells(cells) = row {
                for (i, cell) in cells.iter().enumerate() {
                    if i < widths.len() {
                        widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
                    }
                }
            }
        }

        widths
    }

    fn render_line(cells: &[String], widths: &[usize]) -> String {
        let mut out = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padded = if i == 0 {
                pad_right(cell, *width)
            } else {
                pad_left(cell, *width)
            };
            out.push_str(&padded);
            out.push(' ');
        }
        out.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let total_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&Self::render_line(&self.headers, &widths));
        out.push('\n');

        if let Some(sub) = &self.subheaders {
            out.push_str(&Self::render_line(sub, &widths));
            out.push('\n');
        }

        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in &self.rows {
            match row {
                Row::Cells(cells) => {
                    out.push_str(&Self::render_line(cells, &widths));
                    out.push('\n');
                }
                Row::Section(label) => {
                    out.push_str(&format!("-- {} --", label));
                    out.push('\n');
                }
            }
        }

        out
    }
}
