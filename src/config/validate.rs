//! Schema validation, field normalization, and date validation.
//!
//! Validation never mutates; it examines a parsed [`CourseConfig`] and
//! emits one [`CheckMessage`] per check so the load report records
//! everything that was examined, pass or fail. Normalization never
//! fails; it only transforms (trimming, case folding, defaulting) and is
//! idempotent, so normalizing an already-normalized configuration is a
//! no-op.

use chrono::NaiveDate;

use crate::config::types::CourseConfig;
use crate::error::SyllabusError;
use crate::models::{CheckKind, CheckMessage, LoadWarning, WarningKind};

/// The five top-level sections a structurally valid configuration must
/// contain.
const REQUIRED_SECTIONS: [&str; 5] = [
    "course",
    "instructor",
    "meeting",
    "description",
    "data_paths",
];

/// The ISO calendar-date format accepted for start and end dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of the schema validation sweep.
#[derive(Debug, Clone)]
pub struct SchemaValidation {
    /// One pass/fail message per required section and field.
    pub messages: Vec<CheckMessage>,
}

impl SchemaValidation {
    /// Returns true when every schema check passed.
    pub fn is_valid(&self) -> bool {
        self.messages.iter().all(|m| !m.is_fail())
    }

    /// Returns the first schema failure as a typed error, for strict
    /// mode.
    pub fn first_violation(&self) -> Option<SyllabusError> {
        self.messages
            .iter()
            .find(|m| m.is_fail())
            .map(|m| SyllabusError::SchemaViolation {
                field: m.target.clone(),
                message: m.detail.clone(),
            })
    }
}

/// Outcome of date validation.
#[derive(Debug, Clone)]
pub struct DateValidation {
    /// One message per examined date field, plus an ordering message
    /// when both dates parse.
    pub messages: Vec<CheckMessage>,
    /// The first hard date failure as a typed error, for strict mode.
    pub first_error: Option<SyllabusError>,
    /// The parsed start date, when valid.
    pub start: Option<NaiveDate>,
    /// The parsed end date, when valid.
    pub end: Option<NaiveDate>,
}

/// Checks that the five required sections and their required fields are
/// present.
///
/// A blank (empty-after-trim) string counts as missing. Field checks
/// are skipped for a section that is absent; the section-level failure
/// already names it.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::{CourseConfig, validate_schema};
///
/// let empty = CourseConfig::default();
/// let result = validate_schema(&empty);
/// assert!(!result.is_valid());
/// assert_eq!(result.messages.len(), 5);
/// ```
pub fn validate_schema(config: &CourseConfig) -> SchemaValidation {
    let mut messages = Vec::new();

    let present = [
        config.course.is_some(),
        config.instructor.is_some(),
        config.meeting.is_some(),
        config.description.is_some(),
        config.data_paths.is_some(),
    ];

    for (section, is_present) in REQUIRED_SECTIONS.iter().zip(present) {
        if is_present {
            messages.push(CheckMessage::pass(
                CheckKind::SectionPresent,
                *section,
                "required section is present",
            ));
        } else {
            messages.push(CheckMessage::fail(
                CheckKind::SectionPresent,
                *section,
                "required section is missing",
            ));
        }
    }

    if let Some(course) = &config.course {
        check_field(&mut messages, "course.code", course.code.as_deref());
        check_field(&mut messages, "course.title", course.title.as_deref());
        messages.push(if course.credits.is_some() {
            CheckMessage::pass(
                CheckKind::FieldPresent,
                "course.credits",
                "required field is present",
            )
        } else {
            CheckMessage::fail(
                CheckKind::FieldPresent,
                "course.credits",
                "required field is missing or not numeric",
            )
        });
        check_field(&mut messages, "course.semester", course.semester.as_deref());
    }

    if let Some(instructor) = &config.instructor {
        check_field(&mut messages, "instructor.name", instructor.name.as_deref());
        check_field(
            &mut messages,
            "instructor.email",
            instructor.email.as_deref(),
        );
    }

    if let Some(description) = &config.description {
        let has_text = is_present_str(description.short.as_deref())
            || is_present_str(description.full.as_deref());
        messages.push(if has_text {
            CheckMessage::pass(
                CheckKind::FieldPresent,
                "description.short|full",
                "at least one description text is present",
            )
        } else {
            CheckMessage::fail(
                CheckKind::FieldPresent,
                "description.short|full",
                "at least one of 'short' or 'full' must be provided",
            )
        });
    }

    SchemaValidation { messages }
}

fn is_present_str(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

fn check_field(messages: &mut Vec<CheckMessage>, target: &str, value: Option<&str>) {
    if is_present_str(value) {
        messages.push(CheckMessage::pass(
            CheckKind::FieldPresent,
            target,
            "required field is present",
        ));
    } else {
        messages.push(CheckMessage::fail(
            CheckKind::FieldPresent,
            target,
            "required field is missing or blank",
        ));
    }
}

/// Validates the course start and end dates.
///
/// Each present date is parsed against `YYYY-MM-DD`; when both parse,
/// ordering is checked as well. Absent dates are simply skipped.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::{CourseConfig, CourseSection, validate_dates};
///
/// let config = CourseConfig {
///     course: Some(CourseSection {
///         start_date: Some("2026-01-21".to_string()),
///         end_date: Some("2026-05-08".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// let result = validate_dates(&config);
/// assert!(result.messages.iter().all(|m| !m.is_fail()));
/// assert!(result.first_error.is_none());
/// ```
pub fn validate_dates(config: &CourseConfig) -> DateValidation {
    let mut result = DateValidation {
        messages: Vec::new(),
        first_error: None,
        start: None,
        end: None,
    };

    let Some(course) = &config.course else {
        return result;
    };

    result.start = check_date(
        &mut result.messages,
        &mut result.first_error,
        "course.start_date",
        course.start_date.as_deref(),
    );
    result.end = check_date(
        &mut result.messages,
        &mut result.first_error,
        "course.end_date",
        course.end_date.as_deref(),
    );

    if let (Some(start), Some(end)) = (result.start, result.end) {
        if start < end {
            result.messages.push(CheckMessage::pass(
                CheckKind::DateOrder,
                "course.dates",
                format!("start date {start} precedes end date {end}"),
            ));
        } else {
            result.messages.push(CheckMessage::fail(
                CheckKind::DateOrder,
                "course.dates",
                format!("start date {start} does not precede end date {end}"),
            ));
            if result.first_error.is_none() {
                result.first_error = Some(SyllabusError::DateOrderError { start, end });
            }
        }
    }

    result
}

fn check_date(
    messages: &mut Vec<CheckMessage>,
    first_error: &mut Option<SyllabusError>,
    target: &str,
    value: Option<&str>,
) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => {
            messages.push(CheckMessage::pass(
                CheckKind::DateFormat,
                target,
                format!("parses as {date}"),
            ));
            Some(date)
        }
        Err(_) => {
            messages.push(CheckMessage::fail(
                CheckKind::DateFormat,
                target,
                format!("'{raw}' is not a valid YYYY-MM-DD date"),
            ));
            if first_error.is_none() {
                *first_error = Some(SyllabusError::DateFormatError {
                    field: target.to_string(),
                    value: raw.to_string(),
                });
            }
            None
        }
    }
}

/// Normalizes field formats in place.
///
/// Trims every string field, upper-cases the course code and semester,
/// collapses interior whitespace in the course code, defaults the
/// meeting format to "Face-to-Face", and drops blank entries from list
/// fields. Never fails; the only output besides the mutation is a
/// warning when the normalized semester does not match the expected
/// pattern.
pub fn normalize(config: &mut CourseConfig) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    if let Some(course) = &mut config.course {
        if let Some(code) = &mut course.code {
            *code = collapse_whitespace(code).to_ascii_uppercase();
        }
        tidy(&mut course.code);
        tidy(&mut course.title);
        tidy(&mut course.section);
        if let Some(semester) = &mut course.semester {
            *semester = normalize_semester(semester);
        }
        tidy(&mut course.semester);
        tidy(&mut course.start_date);
        tidy(&mut course.end_date);

        if let Some(semester) = &course.semester {
            if !semester_matches_pattern(semester) {
                warnings.push(LoadWarning::new(
                    WarningKind::SemesterFormat,
                    format!(
                        "semester '{semester}' does not match the expected \
                         SP/SU/FA/WI + four-digit-year pattern"
                    ),
                ));
            }
        }
    }

    if let Some(instructor) = &mut config.instructor {
        tidy(&mut instructor.name);
        tidy(&mut instructor.email);
        tidy(&mut instructor.office);
        tidy(&mut instructor.phone);
        tidy(&mut instructor.office_hours);
    }

    if let Some(meeting) = &mut config.meeting {
        tidy(&mut meeting.location);
        tidy(&mut meeting.days);
        tidy(&mut meeting.time);
        tidy(&mut meeting.format);
        if meeting.format.is_none() {
            meeting.format = Some("Face-to-Face".to_string());
        }
    }

    if let Some(description) = &mut config.description {
        tidy(&mut description.short);
        tidy(&mut description.full);
    }

    if let Some(paths) = &mut config.data_paths {
        for value in paths.values_mut() {
            *value = value.trim().to_string();
        }
    }

    tidy_list(&mut config.learning_outcomes);

    for book in &mut config.textbooks {
        book.title = book.title.trim().to_string();
        tidy(&mut book.edition);
        tidy(&mut book.publisher);
        tidy_list(&mut book.authors);
        tidy_list(&mut book.isbn);
        tidy_list(&mut book.formats);
    }

    warnings
}

/// Normalizes a raw semester code: trimmed and upper-cased.
///
/// This is the whole of semester normalization, so it is idempotent for
/// any input; the pattern check warns but never rewrites.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::normalize_semester;
///
/// assert_eq!(normalize_semester(" sp2026 "), "SP2026");
/// assert_eq!(normalize_semester("SP2026"), "SP2026");
/// ```
pub fn normalize_semester(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Returns true when a normalized semester code matches
/// `{SP|FA|SU|WI}` followed by a four-digit year.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::semester_matches_pattern;
///
/// assert!(semester_matches_pattern("SP2026"));
/// assert!(semester_matches_pattern("FA2025"));
/// assert!(!semester_matches_pattern("XX2026"));
/// assert!(!semester_matches_pattern("SP26"));
/// ```
pub fn semester_matches_pattern(code: &str) -> bool {
    code.len() == 6
        && code.is_ascii()
        && matches!(&code[..2], "SP" | "FA" | "SU" | "WI")
        && code[2..].chars().all(|c| c.is_ascii_digit())
}

/// Trims an optional string, converting blank values to `None`.
fn tidy(value: &mut Option<String>) {
    if let Some(s) = value {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            *value = None;
        } else if trimmed.len() != s.len() {
            *s = trimmed.to_string();
        }
    }
}

/// Trims every entry of a list field and drops the blank ones.
fn tidy_list(values: &mut Vec<String>) {
    values.retain_mut(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.len() != s.len() {
            *s = trimmed.to_string();
        }
        true
    });
}

/// Collapses interior runs of whitespace to single spaces.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
