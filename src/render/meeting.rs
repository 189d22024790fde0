//! Meeting information fragment.

use crate::config::MeetingSection;

/// Renders the meeting block: location, days, time, and delivery
/// format.
///
/// Location, days, and time each degrade to "TBA". The format line
/// shows "Face-to-Face" when the configuration reached this formatter
/// without normalization.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::MeetingSection;
/// use syllabus_engine::render::render_meeting;
///
/// let meeting = MeetingSection {
///     location: Some("Hall 210".to_string()),
///     days: Some("MWF".to_string()),
///     time: Some("10:00-10:50am".to_string()),
///     format: None,
/// };
///
/// let block = render_meeting(&meeting);
/// assert!(block.contains("Location: Hall 210"));
/// assert!(block.contains("Format: Face-to-Face"));
/// ```
pub fn render_meeting(meeting: &MeetingSection) -> String {
    let mut out = String::from("## Meeting Information\n\n");

    out.push_str(&format!(
        "Location: {}\n",
        meeting.location.as_deref().unwrap_or("TBA")
    ));
    out.push_str(&format!(
        "Days: {}\n",
        meeting.days.as_deref().unwrap_or("TBA")
    ));
    out.push_str(&format!(
        "Time: {}\n",
        meeting.time.as_deref().unwrap_or("TBA")
    ));
    out.push_str(&format!(
        "Format: {}\n",
        meeting.format.as_deref().unwrap_or("Face-to-Face")
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_meeting_block() {
        let meeting = MeetingSection {
            location: Some("Hall 210".to_string()),
            days: Some("MWF".to_string()),
            time: Some("10:00-10:50am".to_string()),
            format: Some("Face-to-Face".to_string()),
        };

        assert_eq!(
            render_meeting(&meeting),
            "## Meeting Information\n\n\
             Location: Hall 210\n\
             Days: MWF\n\
             Time: 10:00-10:50am\n\
             Format: Face-to-Face\n"
        );
    }

    #[test]
    fn test_missing_fields_degrade_to_tba() {
        let block = render_meeting(&MeetingSection::default());
        assert!(block.contains("Location: TBA"));
        assert!(block.contains("Days: TBA"));
        assert!(block.contains("Time: TBA"));
        assert!(block.contains("Format: Face-to-Face"));
    }

    #[test]
    fn test_online_format_is_kept() {
        let meeting = MeetingSection {
            format: Some("Online (asynchronous)".to_string()),
            ..Default::default()
        };
        assert!(render_meeting(&meeting).contains("Format: Online (asynchronous)"));
    }
}
