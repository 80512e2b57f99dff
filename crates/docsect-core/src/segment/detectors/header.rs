//! Header-line detector

use super::{sections_from_boundaries, SectionDetector, MIN_CANDIDATES};
use crate::segment::patterns::HEADER_PATTERNS;

/// Detects title-looking lines: Title-Case phrases, ALL-CAPS phrases,
/// "Chapter N" / "Section N", numbered headings, and short capitalized
/// lines immediately followed by a capitalized line.
///
/// Matches from every header shape are pooled and sorted by position; each
/// match's span runs to the next match's start.
pub struct HeaderLineDetector;

impl SectionDetector for HeaderLineDetector {
    fn name(&self) -> &'static str {
        "header_line"
    }

    fn try_segment(&self, text: &str) -> Option<Vec<String>> {
        let mut starts: Vec<usize> = HEADER_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.find_iter(text).map(|m| m.start()))
            .collect();

        if starts.len() < MIN_CANDIDATES {
            return None;
        }
        starts.sort_unstable();

        let sections = sections_from_boundaries(text, &starts);
        (sections.len() >= MIN_CANDIDATES).then_some(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_headings() {
        let body = "It was the best of times and the worse of times for all concerned parties.";
        let text = format!("\nChapter 1 The Beginning\n{body}\n\nChapter 2 The Middle\n{body}\n");
        let sections = HeaderLineDetector.try_segment(&text).unwrap();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("Chapter 1"));
        assert!(sections[1].starts_with("Chapter 2"));
    }

    #[test]
    fn test_single_heading_rejected() {
        let text = "\nChapter 1 Alone\nsome body text\n";
        assert!(HeaderLineDetector.try_segment(text).is_none());
    }

    #[test]
    fn test_no_headings() {
        assert!(HeaderLineDetector
            .try_segment("plain lowercase prose with no structure at all")
            .is_none());
    }
}
