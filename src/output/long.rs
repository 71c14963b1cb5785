//! Branch-glyph tree with an ownership and permission block for regular files

use std::io;

use termcolor::WriteColor;

use crate::entry::{Entry, EntryKind};
use crate::owner::{NameResolver, group_label, owner_label};
use crate::tree::{WalkOutput, WalkSummary};

use super::config::OutputConfig;
use super::utils::{write_name, write_summary};

/// Spaces of indentation per depth level.
pub const LONG_INDENT_WIDTH: usize = 2;
pub const ROOT_BRANCH: &str = "└─";
pub const CHILD_BRANCH: &str = "├─";

/// Everything on an entry's line before its name.
///
/// Only regular files get the `[mode owner group size]` block; every other
/// kind shows just the branch glyph.
pub fn long_prefix<R: NameResolver + ?Sized>(entry: &Entry, resolver: &mut R) -> String {
    let indent = " ".repeat(LONG_INDENT_WIDTH * entry.depth);
    let branch = if entry.depth == 0 {
        ROOT_BRANCH
    } else {
        CHILD_BRANCH
    };

    match (entry.kind, entry.stat) {
        (EntryKind::RegularFile, Some(stat)) => format!(
            "{}{}[{} {} {} {}] ",
            indent,
            branch,
            stat.permissions.symbolic(entry.kind),
            owner_label(resolver, stat.uid),
            group_label(resolver, stat.gid),
            stat.size
        ),
        _ => format!("{}{}", indent, branch),
    }
}

pub struct LongFormatter<W, R> {
    config: OutputConfig,
    out: W,
    resolver: R,
}

impl<W: WriteColor, R: NameResolver> LongFormatter<W, R> {
    pub fn new(out: W, resolver: R, config: OutputConfig) -> Self {
        Self {
            config,
            out,
            resolver,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor, R: NameResolver> WalkOutput for LongFormatter<W, R> {
    fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        let prefix = long_prefix(entry, &mut self.resolver);
        write!(self.out, "{}", prefix)?;
        write_name(&mut self.out, entry)
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        if self.config.show_summary {
            write_summary(&mut self.out, summary)?;
        }
        self.out.flush()
    }
}
