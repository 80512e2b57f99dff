//! Output formatters

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use docsect_core::DocumentSection;

/// Format options
pub struct FormatOptions {
    /// Emit section bodies, not just titles
    pub bodies: bool,
}

/// Format segmented sections
pub fn format_sections(
    sections: &[DocumentSection],
    format: OutputFormat,
    options: &FormatOptions,
) -> String {
    match format {
        OutputFormat::Json => json::format_sections(sections, options),
        OutputFormat::Md => markdown::format_sections(sections, options),
        OutputFormat::Cli => terminal::format_sections(sections, options),
    }
}
