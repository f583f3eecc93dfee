use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// All `*.json` files beneath `root`, in lexicographic path order. A
/// directory entry that cannot be read fails the whole listing, since a
/// skipped person file would skew every statistic.
pub fn list_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && has_extension(entry.path(), &["json"]) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn is_json_lines(path: &Path) -> bool {
    has_extension(path, &["jsonl", "ndjson"])
}
