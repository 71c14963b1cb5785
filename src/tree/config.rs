//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directories at or beyond this depth are listed but not descended into.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    /// Check if a directory at `depth` should not be descended into
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
