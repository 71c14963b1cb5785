//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Paths passed to the builder methods are relative to the tree root.
/// The tree is removed when dropped; any directories locked with
/// [`TestTree::set_mode`] are unlocked first so removal succeeds.
pub struct TestTree {
    dir: TempDir,
    locked: Vec<PathBuf>,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            locked: Vec::new(),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symbolic link at `path` pointing to `target` (not resolved).
    pub fn add_symlink(&self, target: &str, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Set the permission bits of an existing path.
    pub fn set_mode(&mut self, path: &str, mode: u32) {
        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
        if full_path.is_dir() && mode & 0o700 != 0o700 {
            self.locked.push(full_path);
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        for path in &self.locked {
            let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
        }
    }
}
