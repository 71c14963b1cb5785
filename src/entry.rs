//! Filesystem entries as seen by the walker
//!
//! An [`Entry`] is materialized from a metadata query at the moment it is
//! visited and dropped once it has been rendered.

use std::fs::{FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ModeParseError;

const SETUID: u32 = 0o4000;
const SETGID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

/// Classification of an entry's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    RegularFile,
    Directory,
    CharDevice,
    BlockDevice,
    SymLink,
    Pipe,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Classify an OS file type. Types the platform does not name map to `Unknown`.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_file() {
            Self::RegularFile
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_symlink() {
            Self::SymLink
        } else if file_type.is_char_device() {
            Self::CharDevice
        } else if file_type.is_block_device() {
            Self::BlockDevice
        } else if file_type.is_fifo() {
            Self::Pipe
        } else if file_type.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }

    /// The single-character type indicator used by `ls -l`.
    pub fn glyph(self) -> char {
        match self {
            Self::RegularFile => '-',
            Self::Directory => 'd',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::SymLink => 'l',
            Self::Pipe => 'p',
            Self::Socket => 's',
            Self::Unknown => '?',
        }
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        Some(match glyph {
            '-' => Self::RegularFile,
            'd' => Self::Directory,
            'c' => Self::CharDevice,
            'b' => Self::BlockDevice,
            'l' => Self::SymLink,
            'p' => Self::Pipe,
            's' => Self::Socket,
            '?' => Self::Unknown,
            _ => return None,
        })
    }
}

/// Permission bits of a mode: the rwx triplets plus setuid, setgid and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permissions(u32);

impl Permissions {
    /// Keep only the permission bits of a raw `st_mode`.
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// The 9-bit owner/group/other mask.
    pub fn mask(self) -> u32 {
        self.0 & 0o777
    }

    pub fn is_setuid(self) -> bool {
        self.0 & SETUID != 0
    }

    pub fn is_setgid(self) -> bool {
        self.0 & SETGID != 0
    }

    pub fn is_sticky(self) -> bool {
        self.0 & STICKY != 0
    }

    /// Render as `0` followed by the three octal digits of the mask, e.g. `0644`.
    pub fn octal(self) -> String {
        format!("0{:03o}", self.mask())
    }

    /// Render in the `drwxr-xr-x` layout, with the type glyph of `kind` first.
    pub fn symbolic(self, kind: EntryKind) -> String {
        let mut out = String::with_capacity(10);
        out.push(kind.glyph());

        let triplets = [
            (6, self.is_setuid(), 's'),
            (3, self.is_setgid(), 's'),
            (0, self.is_sticky(), 't'),
        ];
        for (shift, special, special_char) in triplets {
            let bits = (self.0 >> shift) & 0o7;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            let exec = bits & 0o1 != 0;
            out.push(match (exec, special) {
                (true, true) => special_char,
                (false, true) => special_char.to_ascii_uppercase(),
                (true, false) => 'x',
                (false, false) => '-',
            });
        }
        out
    }

    /// Decode an octal rendering such as `0644` or `4755`.
    pub fn parse_octal(s: &str) -> Result<Self, ModeParseError> {
        let invalid = || ModeParseError::InvalidOctal(s.to_string());
        if s.is_empty() || s.len() > 5 {
            return Err(invalid());
        }
        let mode = u32::from_str_radix(s, 8).map_err(|_| invalid())?;
        if mode > 0o7777 {
            return Err(invalid());
        }
        Ok(Self(mode))
    }

    /// Decode a 10-character symbolic rendering such as `-rwsr-x--T`.
    pub fn parse_symbolic(s: &str) -> Result<Self, ModeParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 10 {
            return Err(ModeParseError::InvalidLength(chars.len()));
        }
        if EntryKind::from_glyph(chars[0]).is_none() {
            return Err(ModeParseError::InvalidChar {
                ch: chars[0],
                pos: 0,
            });
        }

        let mut mode: u32 = 0;
        let triplets = [(6, SETUID, 's'), (3, SETGID, 's'), (0, STICKY, 't')];
        for (i, (shift, special_bit, special_char)) in triplets.into_iter().enumerate() {
            let base = 1 + i * 3;
            let mut bits: u32 = 0;
            for (offset, (flag, bit)) in [('r', 0o4), ('w', 0o2)].into_iter().enumerate() {
                let pos = base + offset;
                match chars[pos] {
                    c if c == flag => bits |= bit,
                    '-' => {}
                    ch => return Err(ModeParseError::InvalidChar { ch, pos }),
                }
            }
            let pos = base + 2;
            match chars[pos] {
                'x' => bits |= 0o1,
                '-' => {}
                c if c == special_char => {
                    bits |= 0o1;
                    mode |= special_bit;
                }
                c if c == special_char.to_ascii_uppercase() => mode |= special_bit,
                ch => return Err(ModeParseError::InvalidChar { ch, pos }),
            }
            mode |= bits << shift;
        }
        Ok(Self(mode))
    }
}

/// Metadata collected for an entry whose query succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub permissions: Permissions,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub inode: u64,
}

impl From<&Metadata> for EntryStat {
    fn from(metadata: &Metadata) -> Self {
        Self {
            permissions: Permissions::from_mode(metadata.mode()),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.size(),
            inode: metadata.ino(),
        }
    }
}

/// One filesystem node encountered during traversal.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    /// Path component after the last separator.
    pub name: String,
    /// Directory levels between this entry and the root (root = 0).
    pub depth: usize,
    pub kind: EntryKind,
    /// `None` when the metadata query failed.
    pub stat: Option<EntryStat>,
}

impl Entry {
    pub fn from_metadata(path: PathBuf, depth: usize, metadata: &Metadata) -> Self {
        Self {
            name: entry_name(&path),
            path,
            depth,
            kind: EntryKind::from_file_type(metadata.file_type()),
            stat: Some(EntryStat::from(metadata)),
        }
    }

    pub fn unstatable(path: PathBuf, depth: usize) -> Self {
        Self {
            name: entry_name(&path),
            path,
            depth,
            kind: EntryKind::Unknown,
            stat: None,
        }
    }

    pub fn is_statable(&self) -> bool {
        self.stat.is_some()
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Base name of a path, or the whole path when it has none (`.`, `/`, `..`).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
