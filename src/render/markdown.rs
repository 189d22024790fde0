//! Markdown table assembly.
//!
//! The shared table writer behind the schedule, assignment, and
//! grading formatters: column selection with a generic fallback, date
//! column humanizing, optional row limits for previews, and cell
//! escaping.

use crate::models::{DataTable, normalize_column_name};
use crate::render::format::format_table_date;

/// How many columns the generic fallback shows when none of a
/// formatter's expected columns are present.
const FALLBACK_COLUMN_LIMIT: usize = 4;

/// Renders a markdown table from explicit headers and rows.
///
/// Pipe characters in cells are escaped and embedded newlines are
/// flattened so each row stays on one line.
///
/// # Example
///
/// ```
/// use syllabus_engine::render::render_table;
///
/// let table = render_table(
///     &["Week".to_string(), "Topic".to_string()],
///     &[vec!["1".to_string(), "Introduction".to_string()]],
/// );
/// assert_eq!(table, "| Week | Topic |\n| --- | --- |\n| 1 | Introduction |\n");
/// ```
pub fn render_table(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::with_capacity(256);
    write_row(&mut out, columns.iter().map(String::as_str));
    write_row(&mut out, columns.iter().map(|_| "---"));
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str));
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&escape_cell(cell));
        out.push_str(" |");
    }
    out.push('\n');
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Renders a loaded data table, preferring the columns a formatter
/// expects.
///
/// Expected columns present in the table are shown in expected order;
/// when none are present, the first few available columns are shown
/// instead. Columns whose name is date-like have their ISO cells
/// humanized. A row limit truncates the body and appends a note naming
/// how many rows were hidden.
pub(crate) fn render_data_table(
    table: &DataTable,
    expected_columns: &[&str],
    limit: Option<usize>,
) -> String {
    let indices = select_columns(table, expected_columns);

    let headers: Vec<String> = indices
        .iter()
        .map(|&i| table.columns()[i].clone())
        .collect();
    let date_column: Vec<bool> = headers.iter().map(|h| is_date_column(h)).collect();

    let total = table.len();
    let shown = limit.unwrap_or(total).min(total);

    let rows: Vec<Vec<String>> = table.rows()[..shown]
        .iter()
        .map(|row| {
            indices
                .iter()
                .zip(&date_column)
                .map(|(&i, &is_date)| {
                    if is_date {
                        format_table_date(&row[i])
                    } else {
                        row[i].clone()
                    }
                })
                .collect()
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    if shown < total {
        out.push_str(&format!(
            "\n*Showing the first {shown} of {total} rows.*\n"
        ));
    }
    out
}

/// Picks the column indices to display.
fn select_columns(table: &DataTable, expected_columns: &[&str]) -> Vec<usize> {
    let matched: Vec<usize> = expected_columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    if !matched.is_empty() {
        return matched;
    }
    (0..table.columns().len().min(FALLBACK_COLUMN_LIMIT)).collect()
}

fn is_date_column(header: &str) -> bool {
    let name = normalize_column_name(header);
    name == "date" || name.ends_with("_date")
}
