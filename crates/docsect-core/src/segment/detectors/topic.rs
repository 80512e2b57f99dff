//! Topic-shift detector

use std::collections::HashSet;

use super::{SectionDetector, MIN_CANDIDATES};
use crate::segment::patterns::{PARAGRAPH_BREAK, TOPIC_WORD};

/// Fraction of the running word bag a paragraph must share to stay in the
/// current section
const OVERLAP_THRESHOLD: f64 = 0.3;
/// A topic break is only honored once the current section has grown past
/// this many characters
const MIN_ACCUMULATED_CHARS: usize = 300;
/// Paragraphs shorter than this never trigger a break and do not feed the
/// word bag
const MIN_PARAGRAPH_CHARS: usize = 30;

/// Splits text where the vocabulary drifts.
///
/// Maintains a running bag of lowercase 4+-letter words for the current
/// section; a paragraph opens a new section when its overlap with the bag
/// falls below the threshold and the section is already long enough. The
/// bag only ever grows while a section is open.
pub struct TopicShiftDetector;

impl SectionDetector for TopicShiftDetector {
    fn name(&self) -> &'static str {
        "topic_shift"
    }

    fn try_segment(&self, text: &str) -> Option<Vec<String>> {
        let mut sections: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut topic_words: HashSet<String> = HashSet::new();

        for paragraph in PARAGRAPH_BREAK.split(text) {
            let paragraph = paragraph.trim();
            if paragraph.chars().count() < MIN_PARAGRAPH_CHARS {
                current.push(paragraph.to_string());
                continue;
            }

            let paragraph_words = content_words(paragraph);
            let shared = paragraph_words.intersection(&topic_words).count();
            let overlap = shared as f64 / topic_words.len().max(1) as f64;

            if !topic_words.is_empty()
                && overlap < OVERLAP_THRESHOLD
                && joined_len(&current) > MIN_ACCUMULATED_CHARS
            {
                sections.push(current.join("\n\n"));
                current = vec![paragraph.to_string()];
                topic_words = paragraph_words;
            } else {
                current.push(paragraph.to_string());
                topic_words.extend(paragraph_words);
            }
        }

        if !current.is_empty() {
            sections.push(current.join("\n\n"));
        }

        (sections.len() >= MIN_CANDIDATES).then_some(sections)
    }
}

/// Lowercase 4+-letter words of a paragraph.
fn content_words(paragraph: &str) -> HashSet<String> {
    let lowered = paragraph.to_lowercase();
    TOPIC_WORD
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Length of the section as it would be when space-joined.
fn joined_len(paragraphs: &[String]) -> usize {
    let chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
    chars + paragraphs.len().saturating_sub(1)
}
