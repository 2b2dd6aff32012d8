pub mod completions;
pub mod describe;
pub mod scan;
pub mod tags;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{check_default_tag, Manifest, MANIFEST_FILENAME};
use crate::error::{DocError, Result};
use crate::output::{display_path, Printer};
use crate::parser::ParseOptions;

/// doctag - Doc-block comment tag parser
#[derive(Parser, Debug)]
#[command(name = "doctag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to use instead of ./doctag.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse one comment into its tags
    Tags(tags::TagsArgs),

    /// Print the description or first line of a comment
    Describe(describe::DescribeArgs),

    /// Extract and parse every doc block in source files
    Scan(scan::ScanArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Tag filter flags shared by `tags` and `scan`.
///
/// Each flag given replaces the matching manifest setting.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only keep these tags (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub allow: Option<Vec<String>>,

    /// Drop these tags (comma separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "no_ignore")]
    pub ignore: Option<Vec<String>>,

    /// Keep every tag, including the manifest's ignored ones
    #[arg(long)]
    pub no_ignore: bool,

    /// Tag that receives text before the first tag line
    #[arg(long = "default", value_name = "TAG")]
    pub default_tag: Option<String>,
}

impl FilterArgs {
    /// Combine the manifest settings with any flags given.
    pub fn options(&self, manifest: &Manifest) -> Result<ParseOptions> {
        let mut options = manifest.parse_options();

        if let Some(allow) = &self.allow {
            options.allow = allow.iter().cloned().collect();
        }
        if let Some(ignore) = &self.ignore {
            options.ignore = ignore.iter().cloned().collect();
        }
        if self.no_ignore {
            options.ignore.clear();
        }
        if let Some(default) = &self.default_tag {
            check_default_tag(default)?;
            options.default = default.clone();
        }

        Ok(options)
    }
}

/// Load the manifest for this invocation and report where it came from.
pub fn load_manifest(config: Option<&Path>, printer: &Printer) -> Result<Manifest> {
    let cwd = std::env::current_dir()?;
    let (manifest, found) = Manifest::resolve(config, &cwd)?;

    if found {
        let path = config
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.join(MANIFEST_FILENAME));
        printer.info("Using", &display_path(&path));
    }

    Ok(manifest)
}

/// Read a comment from a file, or from stdin for `None` and `-`.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|e| DocError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read file: {}", e),
            })
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
