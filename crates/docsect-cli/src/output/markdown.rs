//! Markdown output formatter

use super::FormatOptions;
use docsect_core::{slugify, DocumentSection};

pub fn format_sections(sections: &[DocumentSection], options: &FormatOptions) -> String {
    let mut out = String::new();

    for section in sections {
        out.push_str(&format!(
            "## {} {{#{}}}\n\n",
            section.title,
            slugify(&section.title, '-')
        ));
        if options.bodies {
            out.push_str(&section.content);
            out.push_str("\n\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_carry_slug_anchors() {
        let sections = vec![DocumentSection {
            title: "My Doc - Section 1".to_string(),
            content: "body".to_string(),
            source_path: "my doc.txt".to_string(),
            index: 0,
        }];
        let out = format_sections(&sections, &FormatOptions { bodies: true });
        assert!(out.contains("## My Doc - Section 1 {#my-doc-section-1}"));
        assert!(out.contains("body"));
    }
}
