//! List-item grouping detector

use super::{SectionDetector, MIN_CANDIDATES};
use crate::segment::patterns::LIST_ITEM_LINE;

/// A list-item line only opens a new group once the current group has
/// grown past this many characters
const GROUP_CHAR_THRESHOLD: usize = 1000;

/// Groups list-heavy text into sections.
///
/// Walks lines; a bullet, `N)`, or `(a)` line starts a new group unless
/// the current group is still short, in which case the item is appended so
/// tightly packed lists are not shredded into one section per item.
pub struct ListGroupingDetector;

impl SectionDetector for ListGroupingDetector {
    fn name(&self) -> &'static str {
        "list_grouping"
    }

    fn try_segment(&self, text: &str) -> Option<Vec<String>> {
        let mut sections = Vec::new();
        let mut current = String::new();

        for line in text.split('\n') {
            let opens_item = LIST_ITEM_LINE.is_match(line);

            if opens_item
                && (current.is_empty() || current.chars().count() > GROUP_CHAR_THRESHOLD)
            {
                let group = current.trim();
                if !group.is_empty() {
                    sections.push(group.to_string());
                }
                current = format!("{line}\n");
            } else {
                current.push_str(line);
                current.push('\n');
            }
        }

        let group = current.trim();
        if !group.is_empty() {
            sections.push(group.to_string());
        }

        (sections.len() >= MIN_CANDIDATES).then_some(sections)
    }
}
