//! Document segmentation engine
//!
//! Splits heterogeneous documents (code, markdown, plain text, and
//! page-extracted PDF text) into retrieval-sized, semantically coherent
//! sections. The filename hint selects a strategy; PDF-style text runs
//! through a fixed-priority cascade of structural detectors with a
//! guaranteed sentence-chunking fallback.

pub mod chunker;
pub mod classify;
pub mod code;
pub mod detectors;
pub mod filter;
pub mod markdown;
pub mod patterns;
pub mod text;

pub use chunker::{chunk_sentences, MIN_SECTION_CHARS, TARGET_SECTION_CHARS};
pub use classify::ContentType;
pub use code::split_code;
pub use detectors::{run_cascade, SectionDetector, StructuralDetector};
pub use filter::{filter_sections, MIN_ALPHA_RATIO, MIN_SECTION_LEN, MIN_WORD_COUNT};
pub use markdown::split_markdown;
pub use text::split_text;

use patterns::PAGE_MARKER_LINE;
use tracing::debug;

/// Split a document into ordered sections.
///
/// The single entry point of the engine. Empty (or whitespace-only) input
/// yields an empty sequence; the sentence-chunking fallback guarantees at
/// least one section for anything else that reaches it.
/// The filename hint is used only for its extension and is never checked
/// against the filesystem. Never panics and never fails: a misbehaving
/// detector is treated as finding nothing and the cascade moves on.
pub fn segment(text: &str, filename_hint: &str) -> Vec<String> {
    let content = text.trim();
    if content.is_empty() {
        return Vec::new();
    }

    let content_type = ContentType::detect(content, filename_hint);
    debug!(
        strategy = content_type.as_str(),
        hint = filename_hint,
        "segmenting document"
    );

    match content_type {
        ContentType::Code => split_code(content),
        ContentType::Markdown => split_markdown(content),
        ContentType::PlainText => split_text(content),
        ContentType::PdfCascade => segment_pdf(content),
    }
}

/// PDF-cascade strategy: strip page markers, try the structural detectors
/// in priority order, filter the winner, or fall back to sentence chunking.
///
/// The fallback output is deliberately returned unfiltered: it is the last
/// resort and must keep its at-least-one-section guarantee.
fn segment_pdf(content: &str) -> Vec<String> {
    let content = PAGE_MARKER_LINE.replace_all(content, "\n\n");

    if let Some(candidates) = detectors::run_cascade(&content) {
        return filter_sections(candidates);
    }

    debug!("no structural detector accepted; falling back to sentence chunking");
    chunk_sentences(&content)
}
