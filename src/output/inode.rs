//! Indented hierarchy with type glyph and inode number

use std::io;

use termcolor::WriteColor;

use crate::entry::Entry;
use crate::tree::{WalkOutput, WalkSummary};

use super::config::OutputConfig;
use super::utils::{write_name, write_summary};

/// Width of the right-justified inode column.
pub const INODE_WIDTH: usize = 7;
/// Spaces of indentation per depth level.
pub const INDENT_WIDTH: usize = 4;

/// Everything on an entry's line before its name.
pub fn inode_prefix(entry: &Entry) -> String {
    let inode = match entry.stat {
        Some(stat) => format!("{:>width$}", stat.inode, width = INODE_WIDTH),
        None => " ".repeat(INODE_WIDTH),
    };
    format!(
        "{}{} {}",
        entry.kind.glyph(),
        inode,
        " ".repeat(INDENT_WIDTH * entry.depth)
    )
}

/// Full uncolored line for an entry, without the trailing newline.
pub fn inode_line(entry: &Entry) -> String {
    format!("{}{}", inode_prefix(entry), entry.name)
}

pub struct InodeFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl<W: WriteColor> InodeFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> WalkOutput for InodeFormatter<W> {
    fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        write!(self.out, "{}", inode_prefix(entry))?;
        write_name(&mut self.out, entry)
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        if self.config.show_summary {
            write_summary(&mut self.out, summary)?;
        }
        self.out.flush()
    }
}
