//! Project manifest (doctag.yaml) parsing.
//!
//! The manifest holds the caller-level tag filters and the source paths
//! used by `doctag scan`. Without a manifest, `param` and `return` tags are
//! ignored, matching what most doc tooling wants from a summary.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocError, Result};
use crate::parser::{is_valid_tag_name, ParseOptions, DEFAULT_TAG};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "doctag.yaml";

/// Reject a default tag name that could never appear as a tag.
///
/// An empty name is allowed and disables the default tag.
pub fn check_default_tag(name: &str) -> Result<()> {
    if name.is_empty() || is_valid_tag_name(name) {
        return Ok(());
    }

    Err(DocError::Config {
        message: format!("Invalid default tag name '{}'", name),
        help: Some("Use a letter followed by letters, digits or '_', or leave it empty".to_string()),
    })
}

/// Project manifest loaded from doctag.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Tag receiving text before the first tag line.
    pub default: String,

    /// Only keep these tags (plus the default tag) when non-empty.
    pub allow: Vec<String>,

    /// Tags to drop.
    pub ignore: Vec<String>,

    /// Paths scanned when `doctag scan` is given none.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// File extensions to scan, without the dot.
    pub extensions: Vec<String>,

    /// Patterns to exclude from scanning.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            default: DEFAULT_TAG.to_string(),
            allow: vec![],
            ignore: vec!["param".to_string(), "return".to_string()],
            sources: vec![],
            extensions: vec!["php".to_string()],
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a doctag.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DocError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self = serde_yaml::from_str(content).map_err(|e| DocError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check doctag.yaml syntax".to_string()),
        })?;

        check_default_tag(&manifest.default)?;
        Ok(manifest)
    }

    /// Load an explicit manifest, or `doctag.yaml` from `dir` if present.
    ///
    /// Returns the manifest and whether a file was read.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<(Self, bool)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, true));
        }

        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Ok((Self::load(&path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Parser options described by this manifest.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            allow: self.allow.iter().cloned().collect::<BTreeSet<_>>(),
            ignore: self.ignore.iter().cloned().collect::<BTreeSet<_>>(),
            default: self.default.clone(),
        }
    }

    /// Whether a file extension is one we scan.
    pub fn scans_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<PathBuf> {
        if self.sources.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.sources.iter().map(PathBuf::from).collect()
        }
    }
}
