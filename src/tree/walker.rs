//! TreeWalker - recursive depth-first traversal feeding a streaming sink

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::entry::Entry;
use crate::error::WalkError;

use super::config::WalkerConfig;
use super::traversal::{read_children, stat_child};

/// Sink for walk output - receives each entry in pre-order as it is visited.
pub trait WalkOutput {
    fn entry(&mut self, entry: &Entry) -> io::Result<()>;

    /// Called for a recoverable failure, before the affected entry (if any) is emitted.
    fn skipped(&mut self, _error: &WalkError) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Counts gathered over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    /// Every visited entry, the root included.
    pub entries: usize,
    /// Directories below the root.
    pub directories: usize,
    /// Statable entries that are not directories.
    pub files: usize,
    pub unstatable: usize,
    pub unreadable_dirs: usize,
}

impl WalkSummary {
    fn record(&mut self, entry: &Entry) {
        self.entries += 1;
        if !entry.is_statable() {
            self.unstatable += 1;
        } else if entry.is_dir() {
            if entry.depth > 0 {
                self.directories += 1;
            }
        } else {
            self.files += 1;
        }
    }
}

/// Depth-first walker. All per-walk state is threaded through the recursion.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the subtree at `root`, streaming every entry to `output`.
    ///
    /// The root is queried following symbolic links; failing to query it is
    /// the only error that aborts before any output. Entries below the root
    /// that cannot be inspected are reported through `WalkOutput::skipped`.
    pub fn walk<O: WalkOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary, WalkError> {
        let metadata = fs::metadata(root).map_err(|source| WalkError::RootUnreachable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut summary = WalkSummary::default();
        let entry = Entry::from_metadata(root.to_path_buf(), 0, &metadata);
        self.visit(&entry, output, &mut summary)?;

        output.finish(&summary)?;
        Ok(summary)
    }

    fn visit<O: WalkOutput>(
        &self,
        entry: &Entry,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<(), WalkError> {
        summary.record(entry);
        output.entry(entry)?;

        if !entry.is_dir() || self.config.at_max_depth(entry.depth) {
            return Ok(());
        }

        let children = match read_children(&entry.path) {
            Ok(children) => children,
            Err(source) => {
                summary.unreadable_dirs += 1;
                let err = WalkError::DirectoryUnreadable {
                    path: entry.path.clone(),
                    source,
                };
                skip(&err, output)?;
                return Ok(());
            }
        };

        for child_path in children {
            let child = match stat_child(child_path, entry.depth + 1) {
                Ok(child) => child,
                Err((child, err)) => {
                    skip(&err, output)?;
                    child
                }
            };
            self.visit(&child, output, summary)?;
        }

        Ok(())
    }
}

/// Log a per-entry failure and hand it to the sink. The walk carries on afterwards.
fn skip<O: WalkOutput>(err: &WalkError, output: &mut O) -> io::Result<()> {
    debug_assert!(err.is_recoverable(), "fatal error routed as a skip: {}", err);
    let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
    tracing::debug!(path = %path, "skipped: {}", err);
    output.skipped(err)
}
