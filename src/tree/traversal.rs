//! Low-level helpers for reading directories and querying child metadata.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::WalkError;

/// List the children of a directory, sorted by file name.
///
/// The directory handle is released before this returns, so no handle is
/// held while the caller recurses. Children that fail mid-enumeration are
/// logged and left out.
pub fn read_children(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut names: Vec<OsString> = Vec::new();
    for dirent in fs::read_dir(path)? {
        match dirent {
            Ok(d) => names.push(d.file_name()),
            Err(e) => {
                tracing::debug!(dir = %path.display(), error = %e, "skipping unreadable child")
            }
        }
    }
    names.sort();
    Ok(names.into_iter().map(|name| path.join(name)).collect())
}

/// Query a non-root entry without following symbolic links.
///
/// A link whose target cannot be queried is treated as unstatable, the
/// same way the entry itself would be. On failure the placeholder entry is
/// returned together with the error describing why.
pub fn stat_child(path: PathBuf, depth: usize) -> Result<Entry, (Entry, WalkError)> {
    let result = fs::symlink_metadata(&path).and_then(|meta| {
        if meta.file_type().is_symlink() {
            fs::metadata(&path)?;
        }
        Ok(meta)
    });

    match result {
        Ok(meta) => Ok(Entry::from_metadata(path, depth, &meta)),
        Err(source) => {
            let err = WalkError::EntryUnstatable {
                path: path.clone(),
                source,
            };
            Err((Entry::unstatable(path, depth), err))
        }
    }
}
