//! Instructor block fragment.

use crate::config::InstructorSection;
use crate::render::format::format_email_link;

/// Renders the instructor contact block.
///
/// The name and email degrade to "TBA"; office and phone lines are
/// omitted entirely when absent; office hours default to
/// "By appointment".
///
/// # Example
///
/// ```
/// use syllabus_engine::config::InstructorSection;
/// use syllabus_engine::render::render_instructor;
///
/// let instructor = InstructorSection {
///     name: Some("Dr. Jane Smith".to_string()),
///     email: Some("jsmith@university.edu".to_string()),
///     ..Default::default()
/// };
///
/// let block = render_instructor(&instructor);
/// assert!(block.contains("**Dr. Jane Smith**"));
/// assert!(block.contains("[jsmith@university.edu](mailto:jsmith@university.edu)"));
/// assert!(block.contains("Office hours: By appointment"));
/// ```
pub fn render_instructor(instructor: &InstructorSection) -> String {
    let mut out = String::from("## Instructor\n\n");

    let name = instructor.name.as_deref().unwrap_or("TBA");
    out.push_str(&format!("**{name}**\n"));

    let email = instructor.email.as_deref().unwrap_or("");
    out.push_str(&format!("Email: {}\n", format_email_link(email)));

    if let Some(office) = instructor.office.as_deref() {
        out.push_str(&format!("Office: {office}\n"));
    }
    if let Some(phone) = instructor.phone.as_deref() {
        out.push_str(&format!("Phone: {phone}\n"));
    }

    let hours = instructor
        .office_hours
        .as_deref()
        .unwrap_or("By appointment");
    out.push_str(&format!("Office hours: {hours}\n"));

    out
}
