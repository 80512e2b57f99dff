//! Line-based splitter for source code files

use super::patterns::CODE_CONSTRUCTS;

/// Split source code at construct-opening lines.
///
/// A trimmed line beginning with a definition, class, decorator, or
/// visibility keyword closes the accumulated section and opens the next
/// one; everything else accumulates into the current section. Trailing
/// lines form a final section. No quality filtering is applied.
pub fn split_code(content: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        let stripped = line.trim();
        let opens_construct = CODE_CONSTRUCTS.iter().any(|kw| stripped.starts_with(kw));

        if opens_construct && !current.is_empty() {
            sections.push(current.join("\n"));
            current.clear();
        }
        current.push(line);
    }

    if !current.is_empty() {
        sections.push(current.join("\n"));
    }

    sections
}
