//! Entry formatting and display
//!
//! Every formatter implements `WalkOutput` and writes each entry as soon as
//! the walker hands it over:
//!
//! - `flat` - octal mode and root-relative path, one line per entry
//! - `inode` - type glyph, inode number and indented name
//! - `long` - branch glyphs, with mode/owner/group/size for regular files
//! - `json` - newline-delimited JSON objects

mod config;
mod flat;
mod inode;
mod json;
mod long;
mod utils;

pub use config::OutputConfig;
pub use flat::{FlatFormatter, flat_line};
pub use inode::{INDENT_WIDTH, INODE_WIDTH, InodeFormatter, inode_line, inode_prefix};
pub use json::{JsonEntry, JsonFormatter};
pub use long::{CHILD_BRANCH, LongFormatter, ROOT_BRANCH, long_prefix};
pub use utils::name_color;
