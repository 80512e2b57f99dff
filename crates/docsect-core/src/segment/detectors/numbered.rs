//! Numbered-section detector

use super::{sections_from_boundaries, SectionDetector, MIN_CANDIDATES};
use crate::segment::patterns::NUMBERED_PATTERNS;

/// Detects numbered section headings.
///
/// Four conventions are tried (`N.`, `N.N`, Roman numerals, `A.`) and only
/// the single convention with the most matches is used for boundaries.
/// Ties keep the earlier convention in declaration order.
pub struct NumberedSectionDetector;

impl SectionDetector for NumberedSectionDetector {
    fn name(&self) -> &'static str {
        "numbered_section"
    }

    fn try_segment(&self, text: &str) -> Option<Vec<String>> {
        let mut best: Vec<usize> = Vec::new();

        for pattern in NUMBERED_PATTERNS.iter() {
            let starts: Vec<usize> = pattern.find_iter(text).map(|m| m.start()).collect();
            if starts.len() > best.len() {
                best = starts;
            }
        }

        if best.len() < MIN_CANDIDATES {
            return None;
        }

        let sections = sections_from_boundaries(text, &best);
        (sections.len() >= MIN_CANDIDATES).then_some(sections)
    }
}
