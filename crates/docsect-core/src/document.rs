//! Document section records and title helpers

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::segment::segment;

/// A segmented section ready for downstream persistence.
///
/// Mirrors the record a storage collaborator keeps per section: a derived
/// title, the section body, and the source path. The embedding vector is
/// attached downstream and is not this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSection {
    pub title: String,
    pub content: String,
    pub source_path: String,
    pub index: usize,
}

/// Derived title for section `index` (0-based) of a document.
pub fn section_title(stem: &str, index: usize) -> String {
    format!("{} - Section {}", stem, index + 1)
}

/// Filename stem used for derived titles.
pub fn document_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Segment a document and wrap each section in a [`DocumentSection`].
pub fn segment_document(path: &Path, text: &str) -> Vec<DocumentSection> {
    let stem = document_stem(path);
    let hint = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    segment(text, hint)
        .into_iter()
        .enumerate()
        .map(|(index, content)| DocumentSection {
            title: section_title(&stem, index),
            content,
            source_path: path.to_string_lossy().to_string(),
            index,
        })
        .collect()
}

/// ASCII slug of a value: non-word characters stripped, whitespace and
/// separator runs collapsed to a single separator, lowercased.
pub fn slugify(value: &str, separator: char) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for c in value.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == separator || c == '-' || c == '_' {
            pending_separator = true;
        }
        // Everything else is dropped.
    }

    slug
}
