//! lstree - walk a directory tree and print inode, permission and ownership details

pub mod entry;
pub mod error;
pub mod logging;
pub mod output;
pub mod owner;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, EntryKind, EntryStat, Permissions};
pub use error::{ModeParseError, WalkError};
pub use output::{FlatFormatter, InodeFormatter, JsonFormatter, LongFormatter, OutputConfig};
pub use owner::{NameResolver, SystemResolver};
pub use tree::{TreeWalker, WalkOutput, WalkSummary, WalkerConfig};
