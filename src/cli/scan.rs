//! Scan command implementation.
//!
//! Finds doc blocks in source files and prints one record per block.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::Manifest;
use crate::discovery::discover_files;
use crate::error::Result;
use crate::output::{display_path, plural, Format, Printer};
use crate::parser::{extract_doc_blocks, parse_tags, ParseOptions, TagMap};

use super::FilterArgs;

/// Extract and parse every doc block in source files
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files or directories to scan (default: manifest sources)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

/// One parsed doc block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    pub file: String,
    pub line: u32,
    pub declaration: Option<String>,
    pub tags: TagMap,
}

pub fn run(args: ScanArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let paths = if args.paths.is_empty() {
        manifest.effective_sources()
    } else {
        args.paths.clone()
    };

    let files = discover_files(&paths, manifest)?;
    let options = args.filters.options(manifest)?;

    let mut records = Vec::new();
    let mut scanned = 0;

    for file in &files {
        let source = match std::fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                printer.warning("Skipping", &format!("{}: {}", display_path(file), e));
                continue;
            }
        };

        scanned += 1;
        records.extend(scan_source(&display_path(file), &source, &options));
    }

    printer.status(
        "Scanned",
        &format!(
            "{} ({})",
            plural(scanned, "file", "files"),
            plural(records.len(), "doc block", "doc blocks")
        ),
    );

    println!("{}", args.format.render(&records)?.trim_end());
    Ok(())
}

/// Parse every doc block in one source file.
pub fn scan_source(file: &str, source: &str, options: &ParseOptions) -> Vec<ScanRecord> {
    extract_doc_blocks(source)
        .into_iter()
        .map(|block| ScanRecord {
            file: file.to_string(),
            line: block.span.start.line,
            tags: parse_tags(&block.text, options),
            declaration: block.declaration,
        })
        .collect()
}
