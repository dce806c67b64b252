//! Recovers the on-disk spelling of every segment of a path.
//!
//! On case-insensitive, case-preserving filesystems the caller may hold
//! `REPORT.txt` while the directory stores `Report.TXT`. Walking down from the
//! root and listing each directory gives back the stored names.
//!
//! When several entries match a segment case-insensitively (possible on
//! case-sensitive filesystems), an exact match wins; otherwise the first match
//! in directory enumeration order is taken, which is not deterministic across
//! filesystems.

use crate::errors::{PathError, PathResult};
use crate::paths::{full_path, names_match};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    fn matches(self, path: &Path) -> bool {
        match self {
            EntryKind::File => path.is_file(),
            EntryKind::Dir => path.is_dir(),
        }
    }
}

/// Absolute form of `path` with each segment spelled as stored on disk.
///
/// Paths that exist neither as a file nor as a directory come back normalized
/// but otherwise unchanged.
pub fn canonical_path(path: &str) -> PathResult<PathBuf> {
    let full = full_path(path);
    let leaf = if full.is_file() {
        EntryKind::File
    } else if full.is_dir() {
        EntryKind::Dir
    } else {
        debug!(path = %full.display(), "not on disk, keeping spelling");
        return Ok(full);
    };
    stored_spelling(&full, leaf)
}

fn stored_spelling(full: &Path, leaf: EntryKind) -> PathResult<PathBuf> {
    let mut components = full.components().peekable();
    // root (and drive prefix) are kept as written
    let mut out = PathBuf::new();
    while let Some(c) = components.next_if(|c| !matches!(c, Component::Normal(_))) {
        out.push(c.as_os_str());
    }

    let names: Vec<&OsStr> = components.map(|c| c.as_os_str()).collect();
    let last = names.len().saturating_sub(1);
    for (i, name) in names.into_iter().enumerate() {
        let kind = if i == last { leaf } else { EntryKind::Dir };
        let stored = find_entry(&out, name, kind)?;
        out.push(stored);
    }
    Ok(out)
}

fn find_entry(dir: &Path, name: &OsStr, kind: EntryKind) -> PathResult<OsString> {
    let listing = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };
    let wanted = name.to_string_lossy();
    let mut first = None;
    for entry in fs::read_dir(listing).map_err(|e| PathError::from_io(listing, e))? {
        let entry = entry?;
        let stored = entry.file_name();
        if !names_match(&stored.to_string_lossy(), &wanted) || !kind.matches(&entry.path()) {
            continue;
        }
        if stored.as_os_str() == name {
            return Ok(stored);
        }
        first.get_or_insert(stored);
    }
    first.ok_or_else(|| PathError::NotFound(dir.join(name)))
}
