//! Load report model.
//!
//! This module defines the structured result of one configuration load:
//! per-check pass/fail messages, non-fatal warnings, the normalized
//! configuration, and any data tables that loaded successfully.
//!
//! Every condition is carried as an explicit kind enumeration; callers
//! never need to sniff message strings to tell outcomes apart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::CourseConfig;
use crate::models::DataTable;

/// The kind of validation check a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Presence of a required top-level section.
    SectionPresent,
    /// Presence of a required field within a section.
    FieldPresent,
    /// A date field parses against the ISO calendar format.
    DateFormat,
    /// The start date precedes the end date.
    DateOrder,
}

/// Whether a validation check passed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The check succeeded.
    Pass,
    /// The check failed; in strict mode this aborts the build.
    Fail,
}

/// One validation check outcome.
///
/// Every validation step appends at least one message, pass or fail, so
/// the report always records what was examined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckMessage {
    /// The kind of check performed.
    pub kind: CheckKind,
    /// Whether the check passed or failed.
    pub status: CheckStatus,
    /// The dotted path of the section or field examined
    /// (e.g. "instructor" or "course.start_date").
    pub target: String,
    /// Human-readable detail for display.
    pub detail: String,
}

impl CheckMessage {
    /// Creates a passing check message.
    pub fn pass(kind: CheckKind, target: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: CheckStatus::Pass,
            target: target.into(),
            detail: detail.into(),
        }
    }

    /// Creates a failing check message.
    pub fn fail(kind: CheckKind, target: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: CheckStatus::Fail,
            target: target.into(),
            detail: detail.into(),
        }
    }

    /// Returns true if this check failed.
    pub fn is_fail(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

/// The kind of a non-fatal warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A data table file was missing or failed to parse.
    TableLoad,
    /// A data table loaded but contains no rows.
    EmptyTable,
    /// The semester code does not match the `{SP|FA|SU|WI}YYYY` pattern.
    SemesterFormat,
}

/// A non-fatal condition recorded during loading.
///
/// Warnings never abort a build, even in strict mode; rendering helpers
/// substitute placeholder text for whatever the warning degraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadWarning {
    /// The kind of warning.
    pub kind: WarningKind,
    /// Human-readable detail for display.
    pub detail: String,
}

impl LoadWarning {
    /// Creates a warning of the given kind.
    pub fn new(kind: WarningKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// The structured result of loading one course configuration.
///
/// Produced by [`ConfigLoader`](crate::config::ConfigLoader); consumed
/// field by field by the rendering helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// True when every validation check passed.
    pub success: bool,
    /// Outcome of every validation check, in pipeline order.
    pub messages: Vec<CheckMessage>,
    /// Non-fatal warnings recorded during loading.
    pub warnings: Vec<LoadWarning>,
    /// The normalized configuration.
    pub config: CourseConfig,
    /// Loaded data tables keyed by their `data_paths` label. Labels
    /// whose file failed to load are absent.
    pub tables: BTreeMap<String, DataTable>,
}

impl LoadReport {
    /// Returns the loaded table for a `data_paths` label, if any.
    pub fn table(&self, label: &str) -> Option<&DataTable> {
        self.tables.get(label)
    }

    /// Returns the check messages that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckMessage> {
        self.messages.iter().filter(|m| m.is_fail())
    }

    /// Returns the warnings of the given kind.
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &LoadWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}
