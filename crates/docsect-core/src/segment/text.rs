//! Paragraph-based splitter for plain text

use super::patterns::{BULLET_LINE, NUMBERED_LINE, PARAGRAPH_BREAK};

/// Split plain text into blank-line-delimited paragraphs, breaking
/// list-bearing paragraphs further at list-item boundaries.
///
/// Paragraphs without list markers are kept whole. Every emitted section is
/// trimmed; empty results are dropped. No quality filtering is applied.
pub fn split_text(content: &str) -> Vec<String> {
    let mut sections = Vec::new();

    for paragraph in PARAGRAPH_BREAK.split(content) {
        if BULLET_LINE.is_match(paragraph) || NUMBERED_LINE.is_match(paragraph) {
            for item in split_list_items(paragraph) {
                let item = item.trim();
                if !item.is_empty() {
                    sections.push(item.to_string());
                }
            }
        } else {
            let paragraph = paragraph.trim();
            if !paragraph.is_empty() {
                sections.push(paragraph.to_string());
            }
        }
    }

    sections
}

/// Break a paragraph at lines that open a new list item.
fn split_list_items(paragraph: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in paragraph.split('\n') {
        let opens_item = BULLET_LINE.is_match(line) || NUMBERED_LINE.is_match(line);
        if opens_item && !current.is_empty() {
            items.push(current.join("\n"));
            current.clear();
        }
        current.push(line);
    }

    if !current.is_empty() {
        items.push(current.join("\n"));
    }

    items
}
