//! Formatted (ALL-CAPS) heading detector

use super::{sections_from_boundaries, SectionDetector, MIN_CANDIDATES};
use crate::segment::patterns::CAPS_HEADING;

/// Minimum words for an ALL-CAPS line to count as a heading
const MIN_CAPS_WORDS: usize = 3;
/// A single ALL-CAPS word must be longer than this to count
const MIN_SINGLE_WORD_LEN: usize = 5;

/// Detects isolated ALL-CAPS heading lines.
///
/// Short acronym lines are noise, so a candidate line must carry at least
/// three words, or a single word longer than five characters.
pub struct FormattedHeadingDetector;

impl SectionDetector for FormattedHeadingDetector {
    fn name(&self) -> &'static str {
        "formatted_heading"
    }

    fn try_segment(&self, text: &str) -> Option<Vec<String>> {
        let starts: Vec<usize> = CAPS_HEADING
            .captures_iter(text)
            .filter(|caps| {
                let heading = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                let words: Vec<&str> = heading.split_whitespace().collect();
                words.len() >= MIN_CAPS_WORDS
                    || (words.len() == 1 && words[0].len() > MIN_SINGLE_WORD_LEN)
            })
            .filter_map(|caps| caps.get(0).map(|m| m.start()))
            .collect();

        if starts.len() < MIN_CANDIDATES {
            return None;
        }

        let sections = sections_from_boundaries(text, &starts);
        (sections.len() >= MIN_CANDIDATES).then_some(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> &'static str {
        "this lowercase body sentence carries enough characters to survive the span minimum."
    }

    #[test]
    fn test_multi_word_caps_headings() {
        let text = format!(
            "\nTERMS AND CONDITIONS\n{b}\n\nWARRANTY AND LIABILITY\n{b}\n",
            b = body()
        );
        let sections = FormattedHeadingDetector.try_segment(&text).unwrap();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("TERMS AND CONDITIONS"));
    }

    #[test]
    fn test_long_single_word_heading() {
        let text = format!(
            "\nINTRODUCTION\n{b}\n\nBACKGROUND\n{b}\n",
            b = body()
        );
        let sections = FormattedHeadingDetector.try_segment(&text).unwrap();
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_short_acronyms_rejected() {
        let text = format!("\nNASA\n{b}\n\nHTTP\n{b}\n", b = body());
        assert!(FormattedHeadingDetector.try_segment(&text).is_none());
    }

    #[test]
    fn test_two_word_heading_rejected() {
        // Two words fail the three-word floor regardless of their length.
        let text = format!("\nGENERAL TERMS\n{b}\n\nFINAL NOTES\n{b}\n", b = body());
        assert!(FormattedHeadingDetector.try_segment(&text).is_none());
    }
}
