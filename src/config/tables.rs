//! Auxiliary table loading.
//!
//! Loads the CSV files named in a configuration's `data_paths` section.
//! Table loading is always best-effort: a missing file or a malformed
//! row degrades to a [`WarningKind::TableLoad`] warning and the label is
//! simply absent from the result, never a hard stop, even in strict
//! mode. Rendering helpers substitute placeholder text for absent
//! tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::{DataTable, LoadWarning, WarningKind};

/// Loads every table named in `data_paths`.
///
/// Relative paths resolve against `base_dir`, the directory containing
/// the configuration file, so a course directory is self-contained.
/// Returns the tables that loaded plus a warning for each one that did
/// not.
pub fn load_tables(
    base_dir: &Path,
    data_paths: &BTreeMap<String, String>,
) -> (BTreeMap<String, DataTable>, Vec<LoadWarning>) {
    let mut tables = BTreeMap::new();
    let mut warnings = Vec::new();

    for (label, raw_path) in data_paths {
        let path = resolve_path(base_dir, raw_path);
        match load_table(&path) {
            Ok(table) => {
                tracing::debug!(
                    label = label.as_str(),
                    path = %path.display(),
                    rows = table.len(),
                    "loaded data table"
                );
                tables.insert(label.clone(), table);
            }
            Err(message) => {
                tracing::warn!(
                    label = label.as_str(),
                    path = %path.display(),
                    "skipping data table: {message}"
                );
                warnings.push(LoadWarning::new(
                    WarningKind::TableLoad,
                    format!("{label}: {message}"),
                ));
            }
        }
    }

    (tables, warnings)
}

/// Checks loaded tables against the configuration that referenced them.
///
/// The only cross-check performed is row-count presence: a table that
/// loaded but holds zero data rows earns an
/// [`WarningKind::EmptyTable`] warning. The table itself stays in the
/// result so formatters can still inspect its columns.
pub fn cross_check_tables(tables: &BTreeMap<String, DataTable>) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    for (label, table) in tables {
        if table.is_empty() {
            tracing::warn!(label = label.as_str(), "data table has no rows");
            warnings.push(LoadWarning::new(
                WarningKind::EmptyTable,
                format!("{label}: table loaded but contains no rows"),
            ));
        }
    }

    warnings
}

/// Resolves a `data_paths` entry against the configuration directory.
fn resolve_path(base_dir: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Loads one CSV file into a [`DataTable`].
///
/// The first record is the header row. Cells are trimmed; rows with a
/// different field count than the header are padded or truncated to
/// line up. Errors are returned as plain messages for the caller to
/// wrap in a warning.
fn load_table(path: &Path) -> Result<DataTable, String> {
    if !path.exists() {
        return Err(format!("file not found: {}", path.display()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| format!("failed to read header row: {e}"))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| format!("failed to read row: {e}"))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(DataTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> String {
        fs::write(dir.path().join(name), content).unwrap();
        name.to_string()
    }

    #[test]
    fn test_load_tables_reads_headers_and_rows() {
        let dir = TempDir::new().unwrap();
        let mut paths = BTreeMap::new();
        paths.insert(
            "schedule".to_string(),
            write_csv(
                &dir,
                "schedule.csv",
                "Week,Date,Topic\n1,2026-01-21,Introduction\n2,2026-01-28,Supply and Demand\n",
            ),
        );

        let (tables, warnings) = load_tables(dir.path(), &paths);
        assert!(warnings.is_empty());

        let table = tables.get("schedule").unwrap();
        assert_eq!(table.columns(), ["Week", "Date", "Topic"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1, "topic"), Some("Supply and Demand"));
    }

    #[test]
    fn test_missing_file_degrades_to_warning() {
        let dir = TempDir::new().unwrap();
        let mut paths = BTreeMap::new();
        paths.insert("schedule".to_string(), "nope.csv".to_string());

        let (tables, warnings) = load_tables(dir.path(), &paths);
        assert!(tables.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::TableLoad);
        assert!(warnings[0].detail.starts_with("schedule:"));
    }

    #[test]
    fn test_one_bad_table_does_not_block_others() {
        let dir = TempDir::new().unwrap();
        let mut paths = BTreeMap::new();
        paths.insert("schedule".to_string(), "missing.csv".to_string());
        paths.insert(
            "grading".to_string(),
            write_csv(&dir, "grading.csv", "Grade,Range\nA,93-100\n"),
        );

        let (tables, warnings) = load_tables(dir.path(), &paths);
        assert_eq!(tables.len(), 1);
        assert!(tables.contains_key("grading"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_absolute_paths_are_used_as_is() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "grading.csv", "Grade,Range\nA,93-100\n");
        let absolute = dir.path().join("grading.csv");

        let mut paths = BTreeMap::new();
        paths.insert(
            "grading".to_string(),
            absolute.to_string_lossy().into_owned(),
        );

        // Resolve against an unrelated base directory.
        let other = TempDir::new().unwrap();
        let (tables, warnings) = load_tables(other.path(), &paths);
        assert!(warnings.is_empty());
        assert_eq!(tables.get("grading").unwrap().len(), 1);
    }

    #[test]
    fn test_ragged_rows_are_squared_up() {
        let dir = TempDir::new().unwrap();
        let mut paths = BTreeMap::new();
        paths.insert(
            "schedule".to_string(),
            write_csv(&dir, "ragged.csv", "A,B,C\n1,2\n1,2,3,4\n"),
        );

        let (tables, _) = load_tables(dir.path(), &paths);
        let table = tables.get("schedule").unwrap();
        assert_eq!(table.rows()[0], vec!["1", "2", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let dir = TempDir::new().unwrap();
        let mut paths = BTreeMap::new();
        paths.insert(
            "grading".to_string(),
            write_csv(&dir, "grading.csv", "Grade , Range\n A , 93-100 \n"),
        );

        let (tables, _) = load_tables(dir.path(), &paths);
        let table = tables.get("grading").unwrap();
        assert_eq!(table.columns(), ["Grade", "Range"]);
        assert_eq!(table.get(0, "grade"), Some("A"));
    }

    #[test]
    fn test_cross_check_warns_on_empty_table() {
        let mut tables = BTreeMap::new();
        tables.insert(
            "grading".to_string(),
            DataTable::new(vec!["Grade".to_string()], vec![]),
        );
        tables.insert(
            "schedule".to_string(),
            DataTable::new(vec!["Week".to_string()], vec![vec!["1".to_string()]]),
        );

        let warnings = cross_check_tables(&tables);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::EmptyTable);
        assert!(warnings[0].detail.starts_with("grading:"));
    }

    #[test]
    fn test_empty_data_paths_load_nothing() {
        let dir = TempDir::new().unwrap();
        let (tables, warnings) = load_tables(dir.path(), &BTreeMap::new());
        assert!(tables.is_empty());
        assert!(warnings.is_empty());
    }
}
