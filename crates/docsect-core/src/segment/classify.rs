//! Content-type classification from the filename hint

use crate::PAGE_MARKER_PREFIX;

/// Extensions routed to the code splitter
const CODE_EXTENSIONS: &[&str] = &[".py", ".js", ".java", ".cpp", ".c"];

/// Top-level segmentation strategy for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Code,
    Markdown,
    PlainText,
    PdfCascade,
}

impl ContentType {
    /// Classify a document from its filename hint and raw text.
    ///
    /// Page-extracted PDF text is recognized either by a `.pdf` extension
    /// (case-insensitive) or by an embedded page marker, so extracted text
    /// passed under a non-PDF name still takes the cascade path.
    pub fn detect(text: &str, filename_hint: &str) -> Self {
        if filename_hint.to_lowercase().ends_with(".pdf") || text.contains(PAGE_MARKER_PREFIX) {
            Self::PdfCascade
        } else if CODE_EXTENSIONS.iter().any(|ext| filename_hint.ends_with(ext)) {
            Self::Code
        } else if filename_hint.ends_with(".md") {
            Self::Markdown
        } else {
            Self::PlainText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Markdown => "markdown",
            Self::PlainText => "text",
            Self::PdfCascade => "pdf",
        }
    }
}
