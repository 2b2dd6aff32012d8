//! Source file discovery for `doctag scan`.
//!
//! Explicit files are always kept. Directories are walked recursively and
//! filtered by the manifest's extensions and exclude patterns.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Manifest;
use crate::error::{DocError, Result};

/// Collect the files to scan from a list of files and directories.
///
/// The result is sorted and free of duplicates.
pub fn discover_files(paths: &[PathBuf], manifest: &Manifest) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, manifest));
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(DocError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively find scannable files under `root`.
///
/// Exclude patterns match the path relative to `root`, so a directory named
/// on the command line is never excluded by its own name.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            manifest.scans_extension(path) && !manifest.is_excluded(relative)
        })
        .collect()
}
