//! Course description and learning outcomes fragments.

use crate::config::DescriptionSection;

/// Renders the course description, preferring the full text over the
/// short form.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::DescriptionSection;
/// use syllabus_engine::render::render_description;
///
/// let description = DescriptionSection {
///     short: Some("An introduction to macroeconomics.".to_string()),
///     full: None,
/// };
///
/// let block = render_description(&description);
/// assert!(block.contains("An introduction to macroeconomics."));
/// ```
pub fn render_description(description: &DescriptionSection) -> String {
    let text = description
        .full
        .as_deref()
        .or(description.short.as_deref())
        .unwrap_or("Course description to be announced.");

    format!("## Course Description\n\n{text}\n")
}

/// Renders the learning outcomes as a numbered list.
///
/// An empty outcome list renders placeholder text instead.
///
/// # Example
///
/// ```
/// use syllabus_engine::render::render_learning_outcomes;
///
/// let block = render_learning_outcomes(&["Explain GDP.".to_string()]);
/// assert!(block.contains("1. Explain GDP."));
///
/// let empty = render_learning_outcomes(&[]);
/// assert!(empty.contains("Learning outcomes to be announced."));
/// ```
pub fn render_learning_outcomes(outcomes: &[String]) -> String {
    let mut out = String::from("## Learning Outcomes\n\n");

    if outcomes.is_empty() {
        out.push_str("Learning outcomes to be announced.\n");
        return out;
    }

    out.push_str("Upon successful completion of this course, students will be able to:\n\n");
    for (index, outcome) in outcomes.iter().enumerate() {
        out.push_str(&format!("{}. {outcome}\n", index + 1));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_preferred_over_short() {
        let description = DescriptionSection {
            short: Some("Short form.".to_string()),
            full: Some("The full description.".to_string()),
        };

        let block = render_description(&description);
        assert!(block.contains("The full description."));
        assert!(!block.contains("Short form."));
    }

    #[test]
    fn test_short_text_used_when_full_absent() {
        let description = DescriptionSection {
            short: Some("Short form.".to_string()),
            full: None,
        };

        assert!(render_description(&description).contains("Short form."));
    }

    #[test]
    fn test_empty_description_uses_placeholder() {
        let block = render_description(&DescriptionSection::default());
        assert!(block.contains("Course description to be announced."));
    }

    #[test]
    fn test_outcomes_are_numbered_in_order() {
        let outcomes = vec![
            "Explain how GDP is measured.".to_string(),
            "Interpret inflation data.".to_string(),
            "Evaluate fiscal policy proposals.".to_string(),
        ];

        let block = render_learning_outcomes(&outcomes);
        assert!(block.contains("1. Explain how GDP is measured.\n"));
        assert!(block.contains("2. Interpret inflation data.\n"));
        assert!(block.contains("3. Evaluate fiscal policy proposals.\n"));
    }

    #[test]
    fn test_empty_outcomes_use_placeholder() {
        let block = render_learning_outcomes(&[]);
        assert!(block.contains("Learning outcomes to be announced."));
        assert!(!block.contains("1."));
    }
}
