//! Textbook list fragment.

use crate::config::Textbook;

/// Renders the textbook list as markdown bullets.
///
/// Each entry shows the title in italics, an "(optional)" marker for
/// non-required books, then authors, edition, publisher, ISBNs, and
/// availability formats, omitting whatever is absent. An empty list
/// renders a no-textbook notice.
///
/// # Example
///
/// ```
/// use syllabus_engine::config::Textbook;
/// use syllabus_engine::render::render_textbooks;
///
/// let books = vec![Textbook {
///     title: "Macroeconomics".to_string(),
///     authors: vec!["N. Gregory Mankiw".to_string()],
///     edition: Some("11th".to_string()),
///     publisher: Some("Worth Publishers".to_string()),
///     isbn: vec!["978-1-319-10599-8".to_string()],
///     required: true,
///     formats: vec!["print".to_string(), "ebook".to_string()],
/// }];
///
/// let block = render_textbooks(&books);
/// assert!(block.contains(
///     "- *Macroeconomics*, N. Gregory Mankiw, 11th ed., Worth Publishers."
/// ));
/// assert!(block.contains("ISBN 978-1-319-10599-8."));
/// assert!(block.contains("Available: print, ebook."));
/// ```
pub fn render_textbooks(textbooks: &[Textbook]) -> String {
    let mut out = String::from("## Textbooks\n\n");

    if textbooks.is_empty() {
        out.push_str("No textbook is required for this course.\n");
        return out;
    }

    for book in textbooks {
        out.push_str(&render_entry(book));
        out.push('\n');
    }

    out
}

fn render_entry(book: &Textbook) -> String {
    let mut line = format!("- *{}*", book.title);
    if !book.required {
        line.push_str(" (optional)");
    }
    if !book.authors.is_empty() {
        line.push_str(&format!(", {}", book.authors.join(", ")));
    }
    if let Some(edition) = &book.edition {
        line.push_str(&format!(", {edition} ed."));
    }
    if let Some(publisher) = &book.publisher {
        line.push_str(&format!(", {publisher}"));
    }
    if !line.ends_with('.') {
        line.push('.');
    }

    if !book.isbn.is_empty() {
        line.push_str(&format!(" ISBN {}.", book.isbn.join(", ")));
    }
    if !book.formats.is_empty() {
        line.push_str(&format!(" Available: {}.", book.formats.join(", ")));
    }

    line
}
