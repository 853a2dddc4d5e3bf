//! Flat-file snapshot of the candidate names.
//!
//! One name per line, sorted and deduplicated. Saving goes through a
//! sibling temporary file followed by an atomic rename, so a failed write
//! can never leave a half-overwritten snapshot behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

pub const MANIFEST_FILE_NAME: &str = "dirpick_manifest";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no manifest found in the working directory or beside the executable")]
    NotFound,

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Finds the manifest when no explicit path was given: `dirpick_manifest`
/// in the working directory first, then next to the running executable.
pub fn locate() -> Result<PathBuf, ManifestError> {
    let local = PathBuf::from(MANIFEST_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    if let Ok(exe) = std::env::current_exe() {
        let beside = exe.with_file_name(MANIFEST_FILE_NAME);
        if beside.is_file() {
            return Ok(beside);
        }
    }

    Err(ManifestError::NotFound)
}

/// Reads the whole snapshot into memory: cleans each line, drops blanks,
/// sorts and dedupes.
pub fn load(path: &Path) -> Result<Vec<String>, ManifestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = contents
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    names.sort_unstable();
    names.dedup();

    debug!(path = %path.display(), count = names.len(), "loaded manifest");
    Ok(names)
}

/// Rebuilds the snapshot from `names`: sorted ascending, deduplicated, one
/// name per line, newline-terminated, atomically renamed into place.
pub fn store<'a, I>(path: &Path, names: I) -> Result<(), ManifestError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = names.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let write_err = |source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    for name in &sorted {
        writeln!(tmp, "{name}").map_err(write_err)?;
    }
    tmp.flush().map_err(write_err)?;
    tmp.persist(path)
        .map_err(|persist_err| write_err(persist_err.error))?;

    info!(path = %path.display(), count = sorted.len(), "stored manifest");
    Ok(())
}

/// Strips leading spaces/tabs and trailing spaces, tabs and path
/// separators.
fn clean_line(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
        .trim_end_matches(|c: char| c == ' ' || c == '\t' || std::path::is_separator(c))
}
