//! Human-readable terminal output

use super::FormatOptions;
use docsect_core::DocumentSection;

pub fn format_sections(sections: &[DocumentSection], options: &FormatOptions) -> String {
    let mut out = String::new();

    for section in sections {
        out.push_str(&format!(
            "── {} ({} chars)\n",
            section.title,
            section.content.chars().count()
        ));
        if options.bodies {
            out.push_str(&section.content);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
