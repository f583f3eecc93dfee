pub mod filesystem;

use crate::error::{MarketError, Result};
use crate::types::person::Person;
use filesystem::{is_json_lines, list_json_files};
use std::path::Path;
use tracing::{debug, info};

/// Reads people from a JSON array file, a JSON Lines file, or a directory
/// holding one JSON person per file.
pub fn load_people(path: &Path) -> Result<Vec<Person>> {
    if !path.exists() {
        return Err(MarketError::PathNotFound(path.display().to_string()));
    }

    let people = if path.is_dir() {
        load_directory(path)?
    } else if is_json_lines(path) {
        load_json_lines(path)?
    } else {
        load_json_array(path)?
    };

    info!(path = %path.display(), people = people.len(), "loaded people");
    Ok(people)
}

fn parse_error(path: &Path, error: impl std::fmt::Display) -> MarketError {
    MarketError::InputParse {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn load_json_array(path: &Path) -> Result<Vec<Person>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

fn load_json_lines(path: &Path) -> Result<Vec<Person>> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .map_err(|e| parse_error(path, format!("line {}: {}", index + 1, e)))
        })
        .collect()
}

fn load_directory(root: &Path) -> Result<Vec<Person>> {
    let files = list_json_files(root)?;
    debug!(root = %root.display(), files = files.len(), "reading person files");
    files
        .iter()
        .map(|file| -> Result<Person> {
            let content = std::fs::read_to_string(file)?;
            serde_json::from_str(&content).map_err(|e| parse_error(file, e))
        })
        .collect()
}
