//! Course schedule table fragment.

use crate::models::DataTable;
use crate::render::markdown::render_data_table;

/// Columns a schedule table is expected to carry, in display order.
const SCHEDULE_COLUMNS: [&str; 4] = ["week", "date", "topic", "readings"];

/// Renders the course schedule as a markdown table.
///
/// Expected columns (week, date, topic, readings) are shown when
/// present; otherwise the first few available columns are used. An
/// absent or empty table renders the placeholder
/// "Schedule to be announced." The optional row limit truncates for
/// previews.
///
/// # Example
///
/// ```
/// use syllabus_engine::render::render_schedule;
///
/// assert!(render_schedule(None, None).contains("Schedule to be announced."));
/// ```
pub fn render_schedule(table: Option<&DataTable>, limit: Option<usize>) -> String {
    let mut out = String::from("## Course Schedule\n\n");

    match table {
        Some(table) if !table.is_empty() => {
            out.push_str(&render_data_table(table, &SCHEDULE_COLUMNS, limit));
        }
        _ => out.push_str("Schedule to be announced.\n"),
    }

    out
}
