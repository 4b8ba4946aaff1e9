//! Shared utilities for greyworld-cli
//!
//! Input expansion and output path handling used by the binary.

use std::path::{Path, PathBuf};

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff"];

/// Determine the output path for a corrected image.
///
/// Corrected images are always written as PNG: `<stem>_corrected.png`,
/// placed under `out` when given, otherwise next to the input.
pub fn determine_output_path(input: &Path, out: &Option<PathBuf>) -> Result<PathBuf, String> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Invalid input filename: {}", input.display()))?;
    let file_name = format!("{}_corrected.png", stem);

    let dir = match out {
        Some(dir) => dir.clone(),
        None => input.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };
    Ok(dir.join(file_name))
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned one level deep for supported image files; plain
/// files pass through untouched. The result is sorted for consistent
/// ordering.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let entries = std::fs::read_dir(input)
                .map_err(|e| format!("Failed to read directory {}: {}", input.display(), e))?;
            for entry in entries {
                let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
                let path = entry.path();
                if path.is_file() && has_supported_extension(&path) {
                    files.push(path);
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    files.sort();
    Ok(files)
}

/// Check whether a path carries one of the supported image extensions.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
