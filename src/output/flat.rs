//! Flat octal-permission listing
//!
//! One `<mode>\t<path>` line per entry, paths relative to the walk root.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::tree::{WalkOutput, WalkSummary};

/// Render the listing line for an entry, or `None` if it is not listed.
///
/// Unstatable entries are skipped, and a directory root is the
/// self-reference of the listing so it is skipped too.
pub fn flat_line(entry: &Entry, root: &Path) -> Option<String> {
    let stat = entry.stat?;
    let mode = stat.permissions.octal();

    if entry.depth == 0 {
        if entry.is_dir() {
            return None;
        }
        return Some(format!("{}\t{}", mode, entry.path.display()));
    }

    let relative = entry.path.strip_prefix(root).unwrap_or(&entry.path);
    let suffix = if entry.is_dir() { "/" } else { "" };
    Some(format!("{}\t{}{}", mode, relative.display(), suffix))
}

pub struct FlatFormatter<W> {
    out: W,
    root: PathBuf,
}

impl<W: Write> FlatFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            root: PathBuf::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WalkOutput for FlatFormatter<W> {
    fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        if entry.depth == 0 {
            self.root = entry.path.clone();
        }
        if let Some(line) = flat_line(entry, &self.root) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
