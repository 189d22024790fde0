//! Grading scale table fragment.

use crate::models::DataTable;
use crate::render::markdown::render_data_table;

/// Columns a grading table is expected to carry, in display order.
const GRADING_COLUMNS: [&str; 5] = ["grade", "letter", "range", "percent", "minimum"];

/// Renders the grading scale.
///
/// Expected columns (grade/letter plus range/percent/minimum) are shown
/// when present; otherwise the first few available columns are used.
/// An absent or empty table renders the placeholder
/// "Grading scale to be announced."
///
/// # Example
///
/// ```
/// use syllabus_engine::render::render_grading;
///
/// assert!(render_grading(None).contains("Grading scale to be announced."));
/// ```
pub fn render_grading(table: Option<&DataTable>) -> String {
    let mut out = String::from("## Grading Scale\n\n");

    match table {
        Some(table) if !table.is_empty() => {
            out.push_str(&render_data_table(table, &GRADING_COLUMNS, None));
        }
        _ => out.push_str("Grading scale to be announced.\n"),
    }

    out
}
