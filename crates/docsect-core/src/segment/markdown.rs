//! Heading-based splitter for markdown files

/// Split markdown at heading lines.
///
/// Every line whose trimmed form starts with `#` opens a new section;
/// non-heading lines accumulate into the current one. No quality filtering
/// is applied.
pub fn split_markdown(content: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if line.trim().starts_with('#') && !current.is_empty() {
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
