//! Auxiliary data table model.
//!
//! This module defines the [`DataTable`] struct representing one loaded
//! tabular dataset (schedule, assignments, grading scale) referenced by
//! path from a course configuration.

use serde::{Deserialize, Serialize};

/// An ordered tabular dataset with named columns.
///
/// Tables are loaded once per document build from a CSV file named in
/// the configuration's `data_paths` section and are never mutated after
/// loading. All cells are kept as strings; rendering helpers decide how
/// to present individual columns.
///
/// # Example
///
/// ```
/// use syllabus_engine::models::DataTable;
///
/// let table = DataTable::new(
///     vec!["Week".to_string(), "Topic".to_string()],
///     vec![vec!["1".to_string(), "Introduction".to_string()]],
/// );
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get(0, "week"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column names, in file order.
    columns: Vec<String>,
    /// Data rows, each padded or truncated to the column count.
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a table from column names and rows.
    ///
    /// Rows shorter than the column count are padded with empty cells;
    /// longer rows are truncated, so every row lines up with the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Returns the column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the index of a column by name.
    ///
    /// Matching ignores ASCII case and treats spaces, hyphens, and
    /// underscores as equivalent, so `"Due Date"` matches `"due_date"`.
    ///
    /// # Example
    ///
    /// ```
    /// use syllabus_engine::models::DataTable;
    ///
    /// let table = DataTable::new(vec!["Due Date".to_string()], vec![]);
    /// assert_eq!(table.column_index("due_date"), Some(0));
    /// assert_eq!(table.column_index("points"), None);
    /// ```
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_column_name(name);
        self.columns
            .iter()
            .position(|c| normalize_column_name(c) == wanted)
    }

    /// Returns the cell at the given row for the named column.
    ///
    /// Returns `None` when the row is out of range or the column does
    /// not exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }
}

/// Normalizes a column name for lookup: ASCII-lowercased, with spaces
/// and hyphens folded to underscores.
pub(crate) fn normalize_column_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}
