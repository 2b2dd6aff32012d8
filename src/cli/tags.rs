//! Tags command implementation.
//!
//! Parses a single comment and prints its tag map.

use std::path::PathBuf;

use clap::Args;

use crate::config::Manifest;
use crate::error::Result;
use crate::output::{plural, Format, Printer};
use crate::parser::parse_tags;

use super::{read_input, FilterArgs};

/// Parse one comment into its tags
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// File holding the comment (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

pub fn run(args: TagsArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let comment = read_input(args.file.as_deref())?;
    let options = args.filters.options(manifest)?;

    let tags = parse_tags(&comment, &options);
    printer.status("Parsed", &plural(tags.len(), "tag", "tags"));

    println!("{}", args.format.render(&tags)?.trim_end());
    Ok(())
}
