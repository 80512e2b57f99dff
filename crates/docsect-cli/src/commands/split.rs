//! `docsect split` — segment a single document

use std::fs;
use std::io::ErrorKind;

use docsect_core::{segment_document, DocsectError, Result};

use crate::app::{OutputFormat, SplitArgs};
use crate::output::{format_sections, FormatOptions};

pub fn run(args: SplitArgs, format: OutputFormat) -> Result<()> {
    let text = fs::read_to_string(&args.file).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DocsectError::DocumentNotFound(args.file.display().to_string())
        } else {
            DocsectError::Io(e)
        }
    })?;

    let sections = segment_document(&args.file, &text);
    let options = FormatOptions {
        bodies: !args.titles_only,
    };
    print!("{}", format_sections(&sections, format, &options));

    Ok(())
}
