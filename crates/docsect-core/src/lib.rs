//! Docsect Core Library
//!
//! Structural document segmentation for retrieval pipelines: splits plain
//! text, markdown, source code, and page-extracted PDF text into
//! retrieval-sized sections.
//!
//! # Features
//! - Content-type dispatch from the filename hint
//! - Fixed-priority cascade of structural detectors for PDF text
//! - Sentence-boundary fallback chunking with overlap, guaranteed to
//!   produce at least one section for non-empty input
//! - Quality filtering and page-artifact cleanup for cascade output
//!
//! Embedding, persistence, and PDF text extraction are collaborator
//! concerns; this crate takes text in and hands ordered section strings
//! out.

pub mod document;
pub mod error;
pub mod scanner;
pub mod segment;

pub use document::{
    document_stem, section_title, segment_document, slugify, DocumentSection,
};
pub use error::{DocsectError, Error, Result};
pub use scanner::{scan_files, ScanOptions, ScanResult, DEFAULT_EXTENSIONS};
pub use segment::{segment, ContentType, SectionDetector, StructuralDetector};

/// Page-boundary marker prefix emitted by the extraction collaborator
pub const PAGE_MARKER_PREFIX: &str = "=== PAGE";
