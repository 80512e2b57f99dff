//! Structural section detectors for the PDF cascade
//!
//! Each detector scans for one structural signal (header lines, numbering,
//! formatted headings, list markers, topic drift) and proposes section
//! boundaries. Detectors are tried in a fixed priority order; the first one
//! producing at least two candidate sections wins.

mod formatted;
mod header;
mod list;
mod numbered;
mod topic;

pub use formatted::FormattedHeadingDetector;
pub use header::HeaderLineDetector;
pub use list::ListGroupingDetector;
pub use numbered::NumberedSectionDetector;
pub use topic::TopicShiftDetector;

use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Minimum candidates for a detector result to be accepted
pub const MIN_CANDIDATES: usize = 2;

/// Boundary-sliced spans at or below this many characters are discarded
const MIN_BOUNDARY_SPAN: usize = 50;

/// Trait for structural section detectors
pub trait SectionDetector {
    /// Detector name for diagnostics
    fn name(&self) -> &'static str;

    /// Propose candidate sections, or `None` when fewer than
    /// [`MIN_CANDIDATES`] are found.
    fn try_segment(&self, text: &str) -> Option<Vec<String>>;
}

/// Enum-based detector dispatch to avoid heap allocation
pub enum StructuralDetector {
    HeaderLine(HeaderLineDetector),
    Numbered(NumberedSectionDetector),
    Formatted(FormattedHeadingDetector),
    ListGrouping(ListGroupingDetector),
    TopicShift(TopicShiftDetector),
}

impl StructuralDetector {
    /// The cascade, in priority order.
    pub fn cascade() -> [Self; 5] {
        [
            Self::HeaderLine(HeaderLineDetector),
            Self::Numbered(NumberedSectionDetector),
            Self::Formatted(FormattedHeadingDetector),
            Self::ListGrouping(ListGroupingDetector),
            Self::TopicShift(TopicShiftDetector),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HeaderLine(d) => d.name(),
            Self::Numbered(d) => d.name(),
            Self::Formatted(d) => d.name(),
            Self::ListGrouping(d) => d.name(),
            Self::TopicShift(d) => d.name(),
        }
    }

    pub fn try_segment(&self, text: &str) -> Option<Vec<String>> {
        match self {
            Self::HeaderLine(d) => d.try_segment(text),
            Self::Numbered(d) => d.try_segment(text),
            Self::Formatted(d) => d.try_segment(text),
            Self::ListGrouping(d) => d.try_segment(text),
            Self::TopicShift(d) => d.try_segment(text),
        }
    }
}

/// Run the cascade over cleaned text, returning the first accepted result.
///
/// A panicking detector is contained and counted as zero candidates, so the
/// cascade always proceeds to the next detector and ultimately to the
/// caller's fallback.
pub fn run_cascade(text: &str) -> Option<Vec<String>> {
    for detector in StructuralDetector::cascade() {
        match catch_unwind(AssertUnwindSafe(|| detector.try_segment(text))) {
            Ok(Some(sections)) => {
                debug!(
                    detector = detector.name(),
                    candidates = sections.len(),
                    "structural detector accepted"
                );
                return Some(sections);
            }
            Ok(None) => {}
            Err(_) => {
                warn!(
                    detector = detector.name(),
                    "detector panicked; treating as zero candidates"
                );
            }
        }
    }
    None
}

/// Slice text between sorted boundary positions.
///
/// Each boundary's span runs to the next boundary (or end of text); spans
/// are trimmed and kept only when longer than [`MIN_BOUNDARY_SPAN`]
/// characters.
pub(crate) fn sections_from_boundaries(text: &str, starts: &[usize]) -> Vec<String> {
    let mut sections = Vec::new();

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let span = text[start..end].trim();
        if span.chars().count() > MIN_BOUNDARY_SPAN {
            sections.push(span.to_string());
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_order() {
        let names: Vec<&str> = StructuralDetector::cascade()
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "header_line",
                "numbered_section",
                "formatted_heading",
                "list_grouping",
                "topic_shift"
            ]
        );
    }

    #[test]
    fn test_sections_from_boundaries_drops_short_spans() {
        let text = format!("{}\nshort\n{}", "a".repeat(80), "b".repeat(80));
        let short_start = 81;
        let sections = sections_from_boundaries(&text, &[0, short_start, 87]);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with('a'));
        assert!(sections[1].starts_with('b'));
    }

    #[test]
    fn test_run_cascade_empty_text() {
        assert!(run_cascade("").is_none());
    }
}
