//! Assignment table fragment.

use crate::models::DataTable;
use crate::render::markdown::render_data_table;

/// Columns an assignment table is expected to carry, in display order.
const ASSIGNMENT_COLUMNS: [&str; 5] = ["assignment", "name", "due_date", "points", "weight"];

/// Renders the assignment table.
///
/// Expected columns (assignment/name, due date, points, weight) are
/// shown when present; otherwise the first few available columns are
/// used. Due-date cells in ISO form are humanized. An absent or empty
/// table renders the placeholder "Assignments to be announced." The
/// optional row limit truncates for previews.
///
/// # Example
///
/// ```
/// use syllabus_engine::render::render_assignments;
///
/// assert!(render_assignments(None, None).contains("Assignments to be announced."));
/// ```
pub fn render_assignments(table: Option<&DataTable>, limit: Option<usize>) -> String {
    let mut out = String::from("## Assignments\n\n");

    match table {
        Some(table) if !table.is_empty() => {
            out.push_str(&render_data_table(table, &ASSIGNMENT_COLUMNS, limit));
        }
        _ => out.push_str("Assignments to be announced.\n"),
    }

    out
}
