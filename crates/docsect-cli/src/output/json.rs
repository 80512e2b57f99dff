//! JSON output formatter

use super::FormatOptions;
use docsect_core::DocumentSection;

pub fn format_sections(sections: &[DocumentSection], options: &FormatOptions) -> String {
    let output: Vec<serde_json::Value> = sections
        .iter()
        .map(|s| {
            if options.bodies {
                serde_json::json!({
                    "title": s.title,
                    "content": s.content,
                    "file": s.source_path,
                    "index": s.index,
                })
            } else {
                serde_json::json!({
                    "title": s.title,
                    "file": s.source_path,
                    "index": s.index,
                })
            }
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
