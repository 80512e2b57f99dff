//! Shared pattern library for the segmentation engine
//!
//! Every textual pattern used by the splitters and detectors is compiled
//! exactly once here and shared by reference, so matching semantics stay
//! consistent across detectors.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header-line shapes, pooled by the header-line detector. Order is the
    /// declaration order of the shapes; matches from all of them are merged
    /// and sorted by position.
    ///
    /// The last shape folds the "short Title-Case line immediately followed
    /// by a capitalized line" check into the match itself (the trailing
    /// `[A-Z]`); only match start positions are used as boundaries, so the
    /// extra consumed character does not shift any section.
    pub static ref HEADER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\n\s*([A-Z][A-Za-z\s]{2,50})\s*\n").unwrap(),
        Regex::new(r"\n\s*([A-Z\s]{3,50})\s*\n").unwrap(),
        Regex::new(r"\n\s*(Chapter\s+\d+[^\n]*)\s*\n").unwrap(),
        Regex::new(r"\n\s*(Section\s+\d+[^\n]*)\s*\n").unwrap(),
        Regex::new(r"\n\s*(\d+\.\s+[A-Z][^\n]{5,100})\s*\n").unwrap(),
        Regex::new(r"\n\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s*\n[A-Z]").unwrap(),
    ];

    /// Numbering conventions tried by the numbered-section detector. Only
    /// the convention with the most matches wins; ties go to the earliest
    /// entry here (decimal, nested decimal, Roman, lettered).
    pub static ref NUMBERED_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\n\s*(\d+\.\s+[^\n]{5,})").unwrap(),
        Regex::new(r"\n\s*(\d+\.\d+\s+[^\n]{5,})").unwrap(),
        Regex::new(r"\n\s*([IVX]+\.\s+[^\n]{5,})").unwrap(),
        Regex::new(r"\n\s*([A-Z]\.\s+[^\n]{5,})").unwrap(),
    ];

    /// Isolated ALL-CAPS heading line (formatted-heading detector).
    pub static ref CAPS_HEADING: Regex =
        Regex::new(r"\n\s*([A-Z]{3,}(?:\s+[A-Z]{3,})*)\s*\n").unwrap();

    /// A single line that opens a list item: bullet, `N)`, or `(a)`.
    pub static ref LIST_ITEM_LINE: Regex =
        Regex::new(r"^\s*(?:•|[-*]|\d+\)|\([a-z]\))\s+[^\n]+").unwrap();

    /// Bullet marker at the start of a line inside a paragraph.
    pub static ref BULLET_LINE: Regex = Regex::new(r"(?m)^\s*[-*•]\s").unwrap();

    /// Numbered-list marker (`N.`) at the start of a line inside a paragraph.
    pub static ref NUMBERED_LINE: Regex = Regex::new(r"(?m)^\s*\d+\.\s").unwrap();

    /// Blank-line paragraph separator.
    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n\s*").unwrap();

    /// Page-boundary marker on its own line, as emitted by the extraction
    /// collaborator.
    pub static ref PAGE_MARKER_LINE: Regex = Regex::new(r"\n=== PAGE \d+ ===\n").unwrap();

    /// Residual page marker anywhere in a section.
    pub static ref PAGE_MARKER: Regex = Regex::new(r"=== PAGE \d+ ===").unwrap();

    /// Residual "Page N of M" footer.
    pub static ref PAGE_FOOTER: Regex = Regex::new(r"Page \d+ of \d+").unwrap();

    /// Three or more consecutive (possibly whitespace-padded) newlines.
    pub static ref EXCESS_NEWLINES: Regex = Regex::new(r"\n\s*\n\s*\n+").unwrap();

    /// Runs of horizontal whitespace.
    pub static ref HORIZONTAL_WS: Regex = Regex::new(r"[ \t]+").unwrap();

    /// Lowercased content words tracked by the topic-shift detector.
    pub static ref TOPIC_WORD: Regex = Regex::new(r"\b[A-Za-z]{4,}\b").unwrap();

    /// Whitespace following sentence-ending punctuation.
    pub static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Line prefixes that open a code construct (after trimming). Covers the
/// definition/class/decorator/visibility conventions of the supported
/// code extensions.
pub const CODE_CONSTRUCTS: &[&str] = &[
    "def ",
    "class ",
    "async def ",
    "@",
    "function ",
    "public ",
    "private ",
    "protected ",
];
