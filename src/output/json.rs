//! JSON output formatting
//!
//! Streams one JSON object per visited entry (newline-delimited), in walk order.

use std::borrow::Cow;
use std::io::{self, Write};

use serde::Serialize;

use crate::entry::{Entry, EntryKind};
use crate::tree::{WalkOutput, WalkSummary};

use super::config::OutputConfig;

/// Serializable view of an entry. Stat fields are omitted for unstatable entries.
///
/// Paths are rendered lossily so names that are not valid UTF-8 still serialize.
#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub name: &'a str,
    pub path: Cow<'a, str>,
    pub depth: usize,
    pub kind: EntryKind,
    pub statable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inode: Option<u64>,
}

impl<'a> From<&'a Entry> for JsonEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        let stat = entry.stat;
        Self {
            name: &entry.name,
            path: entry.path.to_string_lossy(),
            depth: entry.depth,
            kind: entry.kind,
            statable: stat.is_some(),
            mode: stat.map(|s| s.permissions.octal()),
            permissions: stat.map(|s| s.permissions.symbolic(entry.kind)),
            uid: stat.map(|s| s.uid),
            gid: stat.map(|s| s.gid),
            size: stat.map(|s| s.size),
            inode: stat.map(|s| s.inode),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    summary: &'a WalkSummary,
}

pub struct JsonFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        writeln!(self.out)
    }
}

impl<W: Write> WalkOutput for JsonFormatter<W> {
    fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        self.write_json(&JsonEntry::from(entry))
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        if self.config.show_summary {
            self.write_json(&JsonSummary { summary })?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryStat, Permissions};
    use std::path::PathBuf;

    fn run(entries: &[Entry], show_summary: bool) -> Vec<serde_json::Value> {
        let config = OutputConfig {
            use_color: false,
            show_summary,
        };
        let mut formatter = JsonFormatter::new(Vec::new(), config);
        for e in entries {
            formatter.entry(e).unwrap();
        }
        formatter.finish(&WalkSummary::default()).unwrap();
        String::from_utf8(formatter.into_inner())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_statable_entry_fields() {
        let entry = Entry {
            name: "a.txt".to_string(),
            path: PathBuf::from("root/a.txt"),
            depth: 1,
            kind: EntryKind::RegularFile,
            stat: Some(EntryStat {
                permissions: Permissions::from_mode(0o644),
                uid: 1000,
                gid: 100,
                size: 12,
                inode: 99,
            }),
        };
        let values = run(&[entry], false);
        assert_eq!(values.len(), 1);
        let v = &values[0];
        assert_eq!(v["name"], "a.txt");
        assert_eq!(v["path"], "root/a.txt");
        assert_eq!(v["kind"], "regular_file");
        assert_eq!(v["mode"], "0644");
        assert_eq!(v["permissions"], "-rw-r--r--");
        assert_eq!(v["inode"], 99);
        assert_eq!(v["statable"], true);
    }

    #[test]
    fn test_unstatable_entry_omits_stat_fields() {
        let values = run(&[Entry::unstatable(PathBuf::from("root/gone"), 1)], false);
        let v = &values[0];
        assert_eq!(v["kind"], "unknown");
        assert_eq!(v["statable"], false);
        assert!(v.get("inode").is_none());
        assert!(v.get("mode").is_none());
    }

    #[test]
    fn test_non_utf8_path_serializes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"root/bad\xffname"));
        let entry = Entry::unstatable(path, 1);
        let values = run(&[entry], false);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["path"], "root/bad\u{FFFD}name");
        assert_eq!(values[0]["name"], "bad\u{FFFD}name");
    }

    #[test]
    fn test_summary_line() {
        let values = run(&[], true);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["summary"]["entries"], 0);
    }
}
