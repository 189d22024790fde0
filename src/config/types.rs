//! Configuration types for syllabus generation.
//!
//! This module contains the typed course configuration structures that
//! are deserialized from YAML configuration files.
//!
//! Every top-level section is optional at the serde layer. Required-ness
//! is enforced by schema validation instead, so a missing section or
//! field produces a check message naming exactly what was absent rather
//! than an opaque deserialization error.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The complete course configuration for one offering.
///
/// Loaded once per document build and never mutated after
/// normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Course identity: code, title, semester, dates.
    pub course: Option<CourseSection>,
    /// Instructor contact information.
    pub instructor: Option<InstructorSection>,
    /// Meeting location and schedule.
    pub meeting: Option<MeetingSection>,
    /// Short and/or full course description.
    pub description: Option<DescriptionSection>,
    /// Table-type label ("schedule", "assignments", "grading", ...) to
    /// data file path. Relative paths resolve against the directory
    /// containing the configuration file.
    pub data_paths: Option<BTreeMap<String, String>>,
    /// Ordered learning outcomes; may be empty.
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    /// Required and optional textbooks; may be empty.
    #[serde(default)]
    pub textbooks: Vec<Textbook>,
}

/// Course identity and term information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseSection {
    /// The course code (e.g. "ECON 2010"). Upper-cased during
    /// normalization.
    pub code: Option<String>,
    /// The course title.
    pub title: Option<String>,
    /// The section number, kept as text so leading zeros survive.
    #[serde(default, deserialize_with = "flexible_string")]
    pub section: Option<String>,
    /// Credit hours. Accepts a YAML number or a quoted numeric string;
    /// anything unparseable deserializes as absent and is reported by
    /// schema validation.
    #[serde(default, deserialize_with = "flexible_number")]
    pub credits: Option<f64>,
    /// The semester code (e.g. "SP2026"). Upper-cased during
    /// normalization and checked against the `{SP|FA|SU|WI}YYYY`
    /// pattern.
    pub semester: Option<String>,
    /// First day of classes, ISO format (YYYY-MM-DD).
    pub start_date: Option<String>,
    /// Last day of classes, ISO format (YYYY-MM-DD).
    pub end_date: Option<String>,
}

/// Instructor contact information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstructorSection {
    /// The instructor's name.
    pub name: Option<String>,
    /// The instructor's email address.
    pub email: Option<String>,
    /// Office location.
    pub office: Option<String>,
    /// Office phone number, kept as text.
    #[serde(default, deserialize_with = "flexible_string")]
    pub phone: Option<String>,
    /// Office hours description (e.g. "MW 2:00-3:30pm").
    pub office_hours: Option<String>,
}

/// Meeting location and schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingSection {
    /// Meeting room or building.
    pub location: Option<String>,
    /// Meeting days (e.g. "MWF").
    pub days: Option<String>,
    /// Meeting time (e.g. "10:00-10:50am").
    pub time: Option<String>,
    /// Delivery format; defaults to "Face-to-Face" during
    /// normalization.
    pub format: Option<String>,
}

/// Short and/or full course description.
///
/// Schema validation requires at least one of the two fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptionSection {
    /// One-or-two-sentence summary for catalog-style listings.
    pub short: Option<String>,
    /// Full course description.
    pub full: Option<String>,
}

/// One textbook entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Textbook {
    /// The book title.
    pub title: String,
    /// Author names, in cover order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Edition text (e.g. "11th").
    pub edition: Option<String>,
    /// Publisher name.
    pub publisher: Option<String>,
    /// ISBNs for the listed formats.
    #[serde(default)]
    pub isbn: Vec<String>,
    /// Whether the book is required. Defaults to true.
    #[serde(default = "default_required")]
    pub required: bool,
    /// Availability formats (e.g. "print", "ebook").
    #[serde(default)]
    pub formats: Vec<String>,
}

fn default_required() -> bool {
    true
}

/// A YAML scalar that may arrive as a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlexibleScalar {
    Number(f64),
    Text(String),
}

/// Deserializes an optional number, accepting quoted numeric strings.
///
/// Unparseable strings become `None` so that coercion itself never
/// fails; schema validation reports the field as missing instead.
fn flexible_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlexibleScalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlexibleScalar::Number(n)) => Ok(Some(n)),
        Some(FlexibleScalar::Text(s)) => Ok(s.trim().parse().ok()),
    }
}

/// Deserializes an optional string, accepting bare YAML numbers.
///
/// Section numbers and phone numbers are frequently written unquoted;
/// both are text to this crate.
fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlexibleScalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlexibleScalar::Number(n)) => Ok(Some(n.to_string())),
        Some(FlexibleScalar::Text(s)) => Ok(Some(s)),
    }
}
