//! Small utility formatters.
//!
//! These helpers back the block-level fragment renderers: semester
//! display names, credit-hour pluralization, email links, date ranges,
//! table-cell dates, and text wrapping. All are pure functions; missing
//! or unrecognized input degrades to documented fallback text.

use chrono::{Datelike, NaiveDate};

use crate::error::{SyllabusError, SyllabusResult};

/// Formats a semester code as a display name.
///
/// Exactly four season codes are recognized (SP, SU, FA, WI); anything
/// else maps to "Unknown". The year tail is carried through verbatim.
/// A blank code renders as "TBA".
///
/// # Example
///
/// ```
/// use syllabus_engine::render::format_semester_display;
///
/// assert_eq!(format_semester_display("SP2026"), "Spring 2026");
/// assert_eq!(format_semester_display("fa2025"), "Fall 2025");
/// assert_eq!(format_semester_display(""), "TBA");
/// assert_eq!(format_semester_display("XX2026"), "Unknown 2026");
/// ```
pub fn format_semester_display(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return "TBA".to_string();
    }

    let normalized = trimmed.to_ascii_uppercase();
    if !normalized.is_ascii() || normalized.len() < 2 {
        return "Unknown".to_string();
    }

    let (season_code, tail) = normalized.split_at(2);
    let season = match season_code {
        "SP" => "Spring",
        "SU" => "Summer",
        "FA" => "Fall",
        "WI" => "Winter",
        _ => "Unknown",
    };

    let tail = tail.trim();
    if tail.is_empty() {
        season.to_string()
    } else {
        format!("{season} {tail}")
    }
}

/// Formats credit hours with the correct plural form.
///
/// # Example
///
/// ```
/// use syllabus_engine::render::format_credits;
///
/// assert_eq!(format_credits(1.0), "1 credit hour");
/// assert_eq!(format_credits(3.0), "3 credit hours");
/// assert_eq!(format_credits(1.5), "1.5 credit hours");
/// ```
pub fn format_credits(credits: f64) -> String {
    if credits == 1.0 {
        format!("{credits} credit hour")
    } else {
        format!("{credits} credit hours")
    }
}

/// Formats an email address as a markdown mailto link.
///
/// A blank address renders as "TBA".
///
/// # Example
///
/// ```
/// use syllabus_engine::render::format_email_link;
///
/// assert_eq!(
///     format_email_link("jsmith@university.edu"),
///     "[jsmith@university.edu](mailto:jsmith@university.edu)"
/// );
/// assert_eq!(format_email_link("  "), "TBA");
/// ```
pub fn format_email_link(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        return "TBA".to_string();
    }
    format!("[{email}](mailto:{email})")
}

/// Formats a semester date range for display.
///
/// Shared year (and month) components are written once. One-sided
/// ranges are rendered with "Begins"/"Ends"; no dates at all renders
/// as "TBA".
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use syllabus_engine::render::format_date_range;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 21);
/// let end = NaiveDate::from_ymd_opt(2026, 5, 8);
/// assert_eq!(format_date_range(start, end), "January 21 – May 8, 2026");
/// assert_eq!(format_date_range(None, None), "TBA");
/// ```
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (None, None) => "TBA".to_string(),
        (Some(start), None) => format!("Begins {}", long_date(start)),
        (None, Some(end)) => format!("Ends {}", long_date(end)),
        (Some(start), Some(end)) if start == end => long_date(start),
        (Some(start), Some(end)) if start.year() != end.year() => {
            format!("{} – {}", long_date(start), long_date(end))
        }
        (Some(start), Some(end)) if start.month() == end.month() => format!(
            "{}–{}, {}",
            start.format("%B %-d"),
            end.format("%-d"),
            start.year()
        ),
        (Some(start), Some(end)) => format!(
            "{} – {}, {}",
            start.format("%B %-d"),
            end.format("%B %-d"),
            start.year()
        ),
    }
}

/// Formats an ISO date from a table cell as a short display date.
///
/// Values that do not parse as YYYY-MM-DD are returned unchanged, so
/// free-text cells ("Finals week") pass through.
///
/// # Example
///
/// ```
/// use syllabus_engine::render::format_table_date;
///
/// assert_eq!(format_table_date("2026-01-21"), "Jan 21");
/// assert_eq!(format_table_date("Finals week"), "Finals week");
/// ```
pub fn format_table_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Greedily wraps text to the given width.
///
/// Paragraph breaks (blank lines) are preserved; other whitespace is
/// collapsed. A word longer than the width stands alone on its own
/// line. A width of zero is a [`SyllabusError::RenderError`].
///
/// # Example
///
/// ```
/// use syllabus_engine::render::wrap_text;
///
/// let wrapped = wrap_text("the quick brown fox jumps", 10).unwrap();
/// assert_eq!(wrapped, "the quick\nbrown fox\njumps");
/// ```
pub fn wrap_text(text: &str, width: usize) -> SyllabusResult<String> {
    if width == 0 {
        return Err(SyllabusError::RenderError {
            message: "wrap width must be at least 1".to_string(),
        });
    }

    let mut paragraphs = Vec::new();
    for paragraph in text.split("\n\n") {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        paragraphs.push(lines.join("\n"));
    }

    Ok(paragraphs.join("\n\n"))
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_semester_display_recognizes_all_four_seasons() {
        assert_eq!(format_semester_display("SP2026"), "Spring 2026");
        assert_eq!(format_semester_display("SU2026"), "Summer 2026");
        assert_eq!(format_semester_display("FA2025"), "Fall 2025");
        assert_eq!(format_semester_display("WI2027"), "Winter 2027");
    }

    #[test]
    fn test_semester_display_blank_is_tba() {
        assert_eq!(format_semester_display(""), "TBA");
        assert_eq!(format_semester_display("   "), "TBA");
    }

    #[test]
    fn test_semester_display_unknown_season_keeps_year() {
        assert_eq!(format_semester_display("XX2026"), "Unknown 2026");
    }

    #[test]
    fn test_semester_display_lowercase_input() {
        assert_eq!(format_semester_display("sp2026"), "Spring 2026");
    }

    #[test]
    fn test_semester_display_season_without_year() {
        assert_eq!(format_semester_display("SP"), "Spring");
        assert_eq!(format_semester_display("Q"), "Unknown");
    }

    #[test]
    fn test_credits_singular_and_plural() {
        assert_eq!(format_credits(1.0), "1 credit hour");
        assert_eq!(format_credits(3.0), "3 credit hours");
        assert_eq!(format_credits(0.0), "0 credit hours");
        assert_eq!(format_credits(1.5), "1.5 credit hours");
    }

    #[test]
    fn test_email_link() {
        assert_eq!(
            format_email_link("jsmith@university.edu"),
            "[jsmith@university.edu](mailto:jsmith@university.edu)"
        );
        assert_eq!(format_email_link(""), "TBA");
    }

    #[test]
    fn test_date_range_same_year() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 21);
        let end = NaiveDate::from_ymd_opt(2026, 5, 8);
        assert_eq!(format_date_range(start, end), "January 21 – May 8, 2026");
    }

    #[test]
    fn test_date_range_same_month() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5);
        let end = NaiveDate::from_ymd_opt(2026, 1, 30);
        assert_eq!(format_date_range(start, end), "January 5–30, 2026");
    }

    #[test]
    fn test_date_range_across_years() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 24);
        let end = NaiveDate::from_ymd_opt(2027, 5, 7);
        assert_eq!(
            format_date_range(start, end),
            "August 24, 2026 – May 7, 2027"
        );
    }

    #[test]
    fn test_date_range_one_sided() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 21);
        assert_eq!(format_date_range(start, None), "Begins January 21, 2026");
        assert_eq!(format_date_range(None, start), "Ends January 21, 2026");
        assert_eq!(format_date_range(None, None), "TBA");
    }

    #[test]
    fn test_table_date_formats_iso_values() {
        assert_eq!(format_table_date("2026-01-21"), "Jan 21");
        assert_eq!(format_table_date(" 2026-12-04 "), "Dec 4");
    }

    #[test]
    fn test_table_date_passes_through_free_text() {
        assert_eq!(format_table_date("Finals week"), "Finals week");
        assert_eq!(format_table_date("01/21/2026"), "01/21/2026");
    }

    #[test]
    fn test_wrap_text_basic() {
        let wrapped = wrap_text("the quick brown fox jumps over the lazy dog", 15).unwrap();
        assert_eq!(wrapped, "the quick brown\nfox jumps over\nthe lazy dog");
    }

    #[test]
    fn test_wrap_text_preserves_paragraph_breaks() {
        let wrapped = wrap_text("first paragraph\n\nsecond paragraph", 40).unwrap();
        assert_eq!(wrapped, "first paragraph\n\nsecond paragraph");
    }

    #[test]
    fn test_wrap_text_long_word_stands_alone() {
        let wrapped = wrap_text("a extraordinarily b", 5).unwrap();
        assert_eq!(wrapped, "a\nextraordinarily\nb");
    }

    #[test]
    fn test_wrap_text_zero_width_is_render_error() {
        assert!(matches!(
            wrap_text("anything", 0),
            Err(SyllabusError::RenderError { .. })
        ));
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 10).unwrap(), "");
    }

    proptest! {
        #[test]
        fn prop_wrapped_lines_respect_width(
            text in "[a-z ]{0,200}",
            width in 1usize..40,
        ) {
            let wrapped = wrap_text(&text, width).unwrap();
            for line in wrapped.lines() {
                prop_assert!(
                    line.len() <= width || !line.contains(' '),
                    "line '{line}' exceeds width {width}"
                );
            }
        }

        #[test]
        fn prop_wrapping_preserves_words(text in "[a-z ]{0,200}") {
            let wrapped = wrap_text(&text, 12).unwrap();
            let original: Vec<&str> = text.split_whitespace().collect();
            let rewrapped: Vec<&str> = wrapped.split_whitespace().collect();
            prop_assert_eq!(original, rewrapped);
        }
    }
}
