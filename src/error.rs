//! Error types for tree walking

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    /// The traversal root could not be queried. Aborts the walk.
    #[error("cannot access '{}': {source}", path.display())]
    RootUnreachable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-root entry could not be queried; it is rendered with placeholders.
    #[error("cannot stat '{}': {source}", path.display())]
    EntryUnstatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory's children could not be listed; the directory still renders.
    #[error("cannot read directory '{}': {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl WalkError {
    /// The path this error occurred at, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::RootUnreachable { path, .. }
            | Self::EntryUnstatable { path, .. }
            | Self::DirectoryUnreadable { path, .. } => Some(path),
            Self::Output(_) => None,
        }
    }

    /// Whether the walk continues after this error.
    ///
    /// Per-entry failures are skipped and the walk moves on to the next sibling.
    /// Root and output failures halt immediately.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EntryUnstatable { .. } | Self::DirectoryUnreadable { .. }
        )
    }
}

/// Failure decoding a rendered permission string back into mode bits.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModeParseError {
    #[error("invalid octal mode '{0}'")]
    InvalidOctal(String),

    #[error("symbolic mode must be 10 characters, got {0}")]
    InvalidLength(usize),

    #[error("unexpected character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },
}
