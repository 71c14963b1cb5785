//! Directory tree walking logic
//!
//! `TreeWalker` visits a subtree depth-first in pre-order and hands each
//! entry to a `WalkOutput` sink as soon as it has been stat'ed, so memory
//! use is bounded by the depth of the tree and the width of one directory.

mod config;
mod traversal;
mod walker;

pub use config::WalkerConfig;
pub use walker::{TreeWalker, WalkOutput, WalkSummary};
