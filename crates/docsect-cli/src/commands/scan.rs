//! `docsect scan` — segment every supported document under a directory

use std::fs;

use docsect_core::{scan_files, segment_document, DocsectError, Result, ScanOptions};
use tracing::warn;

use crate::app::{OutputFormat, ScanArgs};
use crate::output::{format_sections, FormatOptions};

pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    if !args.dir.exists() {
        return Err(DocsectError::InvalidInput(format!(
            "directory does not exist: {}",
            args.dir.display()
        )));
    }

    let mut options = ScanOptions {
        pattern: args.pattern.clone(),
        ..Default::default()
    };
    if let Some(extensions) = &args.extensions {
        options.extensions = extensions.iter().map(|e| e.to_lowercase()).collect();
    }

    let found = scan_files(&args.dir, &options)?;
    if verbose {
        eprintln!("found {} files under {}", found.len(), args.dir.display());
    }

    let mut all_sections = Vec::new();
    let mut summary = Vec::new();

    for result in found {
        // Files that are not valid UTF-8 (e.g. an unconverted binary PDF)
        // are skipped, not fatal.
        let text = match fs::read_to_string(&result.path) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %result.path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        let sections = segment_document(&result.path, &text);
        summary.push((result.relative_path.clone(), sections.len()));
        all_sections.extend(sections);
    }

    if args.full {
        let options = FormatOptions { bodies: true };
        print!("{}", format_sections(&all_sections, format, &options));
    } else if format == OutputFormat::Json {
        let counts: Vec<serde_json::Value> = summary
            .iter()
            .map(|(file, count)| serde_json::json!({ "file": file, "sections": count }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for (file, count) in &summary {
            println!("{file}: {count} sections");
        }
    }

    Ok(())
}
