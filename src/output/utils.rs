//! Shared helpers for the text formatters

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::entry::{Entry, EntryKind};
use crate::tree::WalkSummary;

/// Color used for an entry's name, if any.
pub fn name_color(entry: &Entry) -> Option<ColorSpec> {
    if !entry.is_statable() {
        return Some(ColorSpec::new().set_fg(Some(Color::Red)).clone());
    }
    match entry.kind {
        EntryKind::Directory => Some(
            ColorSpec::new()
                .set_fg(Some(Color::Blue))
                .set_bold(true)
                .clone(),
        ),
        EntryKind::SymLink => Some(ColorSpec::new().set_fg(Some(Color::Cyan)).clone()),
        _ => None,
    }
}

/// Write the entry's base name and end the line.
pub fn write_name<W: WriteColor>(out: &mut W, entry: &Entry) -> io::Result<()> {
    match name_color(entry) {
        Some(spec) => {
            out.set_color(&spec)?;
            write!(out, "{}", entry.name)?;
            out.reset()?;
        }
        None => write!(out, "{}", entry.name)?,
    }
    writeln!(out)
}

/// Write the footer in the same shape `tree` uses.
pub fn write_summary<W: Write>(out: &mut W, summary: &WalkSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} directories, {} files",
        summary.directories, summary.files
    )
}
