//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading course
//! configurations from YAML files and driving the validation pipeline.

use std::fs;
use std::path::Path;

use crate::config::tables::{cross_check_tables, load_tables};
use crate::config::types::CourseConfig;
use crate::config::validate::{normalize, validate_dates, validate_schema};
use crate::error::{SyllabusError, SyllabusResult};
use crate::models::LoadReport;

/// Loads course configurations and produces structured load reports.
///
/// A load walks the pipeline in order: existence check, YAML parse,
/// schema validation, normalization, date validation, table loading,
/// and cross-reference checks. Every step appends messages or warnings
/// to the report, so no outcome is silent.
///
/// # Directory Structure
///
/// A course configuration directory is self-contained:
/// ```text
/// config/econ2010/
/// ├── course.yaml      # Course configuration
/// ├── schedule.csv     # Tables referenced from data_paths,
/// ├── assignments.csv  # resolved relative to course.yaml
/// └── grading.csv
/// ```
///
/// # Example
///
/// ```no_run
/// use syllabus_engine::config::ConfigLoader;
///
/// let report = ConfigLoader::load("./config/econ2010/course.yaml").unwrap();
/// println!("valid: {}, warnings: {}", report.success, report.warnings.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a course configuration in non-strict mode.
    ///
    /// Schema and date failures are recorded on the report (with
    /// `success == false`) rather than raised; the caller decides
    /// whether to proceed. Only a missing file or unparseable YAML
    /// returns an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use syllabus_engine::config::ConfigLoader;
    ///
    /// let report = ConfigLoader::load("./config/econ2010/course.yaml")?;
    /// for warning in &report.warnings {
    ///     eprintln!("warning: {}", warning.detail);
    /// }
    /// # Ok::<(), syllabus_engine::error::SyllabusError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> SyllabusResult<LoadReport> {
        Self::load_inner(path.as_ref(), false)
    }

    /// Loads a course configuration in strict mode.
    ///
    /// The first schema or date failure aborts the build with a typed
    /// error. Table-loading problems are still warnings; they never
    /// abort, even here.
    pub fn load_strict<P: AsRef<Path>>(path: P) -> SyllabusResult<LoadReport> {
        Self::load_inner(path.as_ref(), true)
    }

    fn load_inner(path: &Path, strict: bool) -> SyllabusResult<LoadReport> {
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(SyllabusError::FileNotFound { path: path_str });
        }

        let content = fs::read_to_string(path).map_err(|_| SyllabusError::FileNotFound {
            path: path_str.clone(),
        })?;

        let mut config: CourseConfig =
            serde_yaml::from_str(&content).map_err(|e| SyllabusError::ParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = path_str.as_str(), "parsed course configuration");

        let schema = validate_schema(&config);
        if strict {
            if let Some(error) = schema.first_violation() {
                return Err(error);
            }
        }
        let mut messages = schema.messages;
        let mut warnings = normalize(&mut config);

        let dates = validate_dates(&config);
        if strict {
            if let Some(error) = dates.first_error {
                return Err(error);
            }
        }
        messages.extend(dates.messages);

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let empty = Default::default();
        let data_paths = config.data_paths.as_ref().unwrap_or(&empty);
        let (tables, table_warnings) = load_tables(base_dir, data_paths);
        warnings.extend(table_warnings);
        warnings.extend(cross_check_tables(&tables));

        let success = messages.iter().all(|m| !m.is_fail());
        if !success {
            tracing::warn!(
                path = path_str.as_str(),
                failures = messages.iter().filter(|m| m.is_fail()).count(),
                "configuration failed validation"
            );
        }

        Ok(LoadReport {
            success,
            messages,
            warnings,
            config,
            tables,
        })
    }
}
