//! Quality filtering and artifact cleanup for cascade output

use tracing::debug;

use super::patterns::{EXCESS_NEWLINES, HORIZONTAL_WS, PAGE_FOOTER, PAGE_MARKER};

/// Minimum trimmed length for a section to survive
pub const MIN_SECTION_LEN: usize = 50;
/// Minimum word count for a section to survive
pub const MIN_WORD_COUNT: usize = 10;
/// Minimum fraction of alphabetic characters
pub const MIN_ALPHA_RATIO: f64 = 0.5;

/// Drop low-quality candidates and strip page artifacts from survivors.
///
/// Applied only to structural-detector output on the PDF path; the other
/// splitters and the sentence-chunker fallback are trusted to emit
/// well-formed sections and bypass this entirely. Relative order of
/// survivors is preserved.
pub fn filter_sections(candidates: Vec<String>) -> Vec<String> {
    let mut kept = Vec::new();

    for candidate in candidates {
        let section = candidate.trim();
        let char_count = section.chars().count();

        if char_count < MIN_SECTION_LEN {
            debug!(chars = char_count, "dropping section below length floor");
            continue;
        }

        if section.split_whitespace().count() < MIN_WORD_COUNT {
            debug!("dropping section below word-count floor");
            continue;
        }

        let alpha = section.chars().filter(|c| c.is_ascii_alphabetic()).count();
        if (alpha as f64) / (char_count as f64) < MIN_ALPHA_RATIO {
            debug!("dropping section below alphabetic-ratio floor");
            continue;
        }

        let cleaned = clean_section(section);
        if !cleaned.is_empty() {
            kept.push(cleaned);
        }
    }

    kept
}

/// Remove residual page furniture and collapse whitespace.
fn clean_section(content: &str) -> String {
    let content = PAGE_FOOTER.replace_all(content, "");
    let content = PAGE_MARKER.replace_all(&content, "");
    let content = EXCESS_NEWLINES.replace_all(&content, "\n\n");
    let content = HORIZONTAL_WS.replace_all(&content, " ");
    content.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_section() -> String {
        "This candidate section has plenty of alphabetic words and easily clears every floor."
            .to_string()
    }

    #[test]
    fn test_short_section_dropped() {
        let kept = filter_sections(vec!["too short to keep".to_string(), good_section()]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_low_word_count_dropped() {
        // Long enough, but only a handful of words.
        let candidate = "supercalifragilisticexpialidocious antidisestablishmentarianism floccinaucinihilipilification".to_string();
        let kept = filter_sections(vec![candidate, good_section()]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_low_alpha_ratio_dropped() {
        let candidate = format!("1 2 3 4 5 6 7 8 9 10 11 12 {} 13 14 15 16 17 18 19 20", "a");
        let kept = filter_sections(vec![candidate, good_section()]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_page_artifacts_stripped() {
        let candidate = format!("{}\nPage 3 of 10\n=== PAGE 4 ===", good_section());
        let kept = filter_sections(vec![candidate]);
        assert_eq!(kept.len(), 1);
        assert!(!kept[0].contains("Page 3 of 10"));
        assert!(!kept[0].contains("=== PAGE"));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let candidate = format!("{}\n\n\n\nnext    paragraph of the very same section here", good_section());
        let kept = filter_sections(vec![candidate]);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].contains("\n\n"));
        assert!(!kept[0].contains("\n\n\n"));
        assert!(kept[0].contains("next paragraph"));
    }

    #[test]
    fn test_order_preserved() {
        let a = format!("alpha {}", good_section());
        let b = format!("bravo {}", good_section());
        let kept = filter_sections(vec![a, b]);
        assert!(kept[0].starts_with("alpha"));
        assert!(kept[1].starts_with("bravo"));
    }
}
