//! Syllabus header fragment.

use chrono::NaiveDate;

use crate::config::CourseConfig;
use crate::render::format::{format_credits, format_date_range, format_semester_display};

/// Renders the document header: course code and title, semester,
/// section, credits, and the semester date range.
///
/// Missing fields degrade individually; a configuration with no course
/// section at all still produces a generic heading.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::{CourseConfig, CourseSection};
/// use syllabus_engine::render::render_header;
///
/// let config = CourseConfig {
///     course: Some(CourseSection {
///         code: Some("ECON 2010".to_string()),
///         title: Some("Principles of Macroeconomics".to_string()),
///         credits: Some(3.0),
///         semester: Some("SP2026".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let header = render_header(&config);
/// assert!(header.starts_with("# ECON 2010: Principles of Macroeconomics\n"));
/// assert!(header.contains("**Spring 2026**"));
/// assert!(header.contains("3 credit hours"));
/// ```
pub fn render_header(config: &CourseConfig) -> String {
    let course = config.course.as_ref();

    let code = course.and_then(|c| c.code.as_deref());
    let title = course.and_then(|c| c.title.as_deref());

    let mut out = match (code, title) {
        (Some(code), Some(title)) => format!("# {code}: {title}\n"),
        (Some(code), None) => format!("# {code}\n"),
        (None, Some(title)) => format!("# {title}\n"),
        (None, None) => "# Course Syllabus\n".to_string(),
    };
    out.push('\n');

    let semester = course.and_then(|c| c.semester.as_deref()).unwrap_or("");
    let mut parts = vec![format!("**{}**", format_semester_display(semester))];
    if let Some(section) = course.and_then(|c| c.section.as_deref()) {
        parts.push(format!("Section {section}"));
    }
    if let Some(credits) = course.and_then(|c| c.credits) {
        parts.push(format_credits(credits));
    }
    out.push_str(&parts.join(" · "));
    out.push('\n');

    let start = parse_iso(course.and_then(|c| c.start_date.as_deref()));
    let end = parse_iso(course.and_then(|c| c.end_date.as_deref()));
    if start.is_some() || end.is_some() {
        out.push('\n');
        out.push_str(&format_date_range(start, end));
        out.push('\n');
    }

    out
}

fn parse_iso(value: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?.trim(), "%Y-%m-%d").ok()
}
