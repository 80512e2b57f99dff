//! Sentence-accumulating fallback chunker
//!
//! Last resort of the PDF cascade: when no structural detector finds at
//! least two sections, the text is cut into fixed-size chunks at sentence
//! boundaries, with a short trailing overlap carried into each new chunk
//! to preserve context across the forced split.

use super::patterns::SENTENCE_BREAK;

/// Preferred chunk size in characters
pub const TARGET_SECTION_CHARS: usize = 800;
/// A chunk is never closed before reaching this size
pub const MIN_SECTION_CHARS: usize = 400;
/// Sentence fragments carried from a closed chunk into the next
const OVERLAP_FRAGMENTS: usize = 2;

/// Chunk text at sentence boundaries with overlap.
///
/// Sentences accumulate into a buffer; when appending the next sentence
/// would push the buffer past the target size and the buffer already
/// exceeds the minimum, the buffer is emitted and the new one is seeded
/// with the closed buffer's final two `.`-fragments followed by the
/// triggering sentence. Always returns at least one section for non-blank
/// input.
pub fn chunk_sentences(content: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(content) {
        let current_len = current.chars().count();
        if current_len + sentence.chars().count() > TARGET_SECTION_CHARS
            && current_len > MIN_SECTION_CHARS
        {
            sections.push(current.trim().to_string());
            let overlap = trailing_fragments(&current, OVERLAP_FRAGMENTS);
            current = format!("{}. {}", overlap.join(". "), sentence);
        } else {
            current.push_str(sentence);
            current.push(' ');
        }
    }

    let trailing = current.trim();
    if !trailing.is_empty() {
        sections.push(trailing.to_string());
    }

    sections
}

/// Split text into sentences at whitespace following `.`, `!`, or `?`.
///
/// The punctuation stays with the preceding sentence; the whitespace run
/// is consumed.
fn split_sentences(content: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut prev = 0;

    for m in SENTENCE_BREAK.find_iter(content) {
        // Sentence-ending punctuation is a single ASCII byte.
        let split_at = m.start() + 1;
        sentences.push(&content[prev..split_at]);
        prev = m.end();
    }

    sentences.push(&content[prev..]);
    sentences
}

/// Final `count` period-separated fragments of a buffer.
fn trailing_fragments(buffer: &str, count: usize) -> Vec<&str> {
    let fragments: Vec<&str> = buffer.split('.').collect();
    let start = fragments.len().saturating_sub(count);
    fragments[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(word: &str, repeat: usize) -> String {
        let mut s = word.repeat(repeat);
        s.push('.');
        s
    }

    #[test]
    fn test_short_input_single_section() {
        let sections = chunk_sentences("One sentence. Another sentence.");
        assert_eq!(sections, vec!["One sentence. Another sentence."]);
    }

    #[test]
    fn test_split_sentences_keeps_punctuation() {
        let sentences = split_sentences("First. Second! Third? Fourth");
        assert_eq!(sentences, vec!["First.", "Second!", "Third?", "Fourth"]);
    }

    #[test]
    fn test_long_input_splits_above_minimum() {
        // Ten ~100-char sentences force multiple chunks.
        let text: Vec<String> = (0..10).map(|_| sentence("word ", 20)).collect();
        let text = text.join(" ");

        let sections = chunk_sentences(&text);
        assert!(sections.len() >= 2);
        for section in &sections[..sections.len() - 1] {
            assert!(section.chars().count() >= MIN_SECTION_CHARS);
        }
    }

    #[test]
    fn test_overlap_carried_into_next_chunk() {
        let text: Vec<String> = (0..10).map(|i| format!("sentence number {i} {}.", "pad ".repeat(25))).collect();
        let text = text.join(" ");

        let sections = chunk_sentences(&text);
        assert!(sections.len() >= 2);
        // The second chunk opens with the tail of the first.
        let first_tail = trailing_fragments(&sections[0], 2).join(". ");
        assert!(sections[1].starts_with(first_tail.trim()));
    }

    #[test]
    fn test_unbroken_text_still_emits() {
        // No sentence punctuation at all: one giant "sentence".
        let text = "word ".repeat(300);
        let sections = chunk_sentences(text.trim());
        assert_eq!(sections.len(), 1);
    }
}
