use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use regex::Regex;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Result, VidcatError};
use crate::ordering::OrderingSpec;

/// One node found in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified_at: SystemTime,
    pub is_directory: bool,
}

/// Lists the immediate children of `dir`, dropping sub-directories and names
/// that `pattern` does not match, sorted according to `ordering`.
///
/// A directory with no entries at all is an error. A directory whose entries
/// are all filtered out returns an empty list.
pub fn list(
    dir: &Path,
    ordering: &OrderingSpec,
    pattern: Option<&Regex>,
) -> Result<Vec<DirectoryEntry>> {
    let unreadable = |source: io::Error| VidcatError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let meta = fs::metadata(dir).map_err(unreadable)?;
    if !meta.is_dir() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if vanished(&err) => {
                debug!(error = %err, "entry vanished during scan");
                continue;
            }
            Err(err) => return Err(unreadable(err.into())),
        };
        if let Some(entry) = read_entry(entry).map_err(unreadable)? {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(VidcatError::EmptyDirectory(dir.to_path_buf()));
    }

    let scanned = entries.len();
    entries.retain(|e| {
        let keep = !e.is_directory && pattern.is_none_or(|re| re.is_match(&e.name));
        if !keep {
            debug!(name = %e.name, is_directory = e.is_directory, "skipping entry");
        }
        keep
    });

    entries.sort_by(|a, b| ordering.compare(a, b));
    info!(
        dir = %dir.display(),
        scanned,
        selected = entries.len(),
        "listed directory"
    );
    Ok(entries)
}

/// Stats one scanned entry. Entries removed between readdir and stat are
/// skipped rather than failing the whole scan.
fn read_entry(entry: walkdir::DirEntry) -> io::Result<Option<DirectoryEntry>> {
    let meta = match entry.metadata() {
        Ok(meta) => meta,
        Err(err) if vanished(&err) => {
            debug!(path = %entry.path().display(), "entry vanished before stat");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    Ok(Some(DirectoryEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        is_directory: entry.file_type().is_dir(),
        modified_at: meta.modified()?,
        path: entry.into_path(),
    }))
}

fn vanished(err: &walkdir::Error) -> bool {
    err.depth() > 0 && err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound)
}
