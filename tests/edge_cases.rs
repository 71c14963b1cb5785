//! Edge case and error handling tests for lstree


use harness::{TestTree, run_lstree};
use std::fs;
use std::os::unix::net::UnixListener;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_dangling_symlink_renders_placeholder() {
    let tree = TestTree::new();
    tree.add_symlink("nonexistent.txt", "a_broken");
    tree.add_file("b_real.txt", "real");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success, "lstree should handle broken symlinks");

    let broken = stdout
        .lines()
        .find(|l| l.ends_with("a_broken"))
        .expect("broken link should be listed");
    assert!(broken.starts_with("?        "), "got: {:?}", broken);
    assert!(stdout.contains("b_real.txt"), "siblings still visited");
}

#[test]
fn test_symlink_to_directory_not_descended() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", "x");
    tree.add_symlink("realdir", "linkdir");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success);
    let link = stdout
        .lines()
        .find(|l| l.ends_with("linkdir"))
        .expect("link should be listed");
    assert!(link.starts_with('l'), "got: {:?}", link);
    assert_eq!(stdout.matches("file.txt").count(), 1);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "x");
    tree.add_symlink("..", "subdir/parent");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success, "lstree should not hang on parent symlink");
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_self_referential_symlink() {
    let tree = TestTree::new();
    tree.add_file("file.txt", "x");
    tree.add_symlink("selfref", "selfref");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success);
    let selfref = stdout.lines().find(|l| l.ends_with("selfref")).unwrap();
    assert!(selfref.starts_with('?'), "got: {:?}", selfref);
}

// ============================================================================
// Special Files
// ============================================================================

#[test]
fn test_socket_glyph() {
    let tree = TestTree::new();
    let _listener = UnixListener::bind(tree.path().join("sock")).expect("bind socket");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success);
    let sock = stdout.lines().find(|l| l.ends_with("sock")).unwrap();
    assert!(sock.starts_with('s'), "got: {:?}", sock);
}

#[test]
fn test_long_view_skips_block_for_special_files() {
    let tree = TestTree::new();
    let _listener = UnixListener::bind(tree.path().join("sock")).expect("bind socket");

    let (stdout, _stderr, success) =
        run_lstree(tree.path(), &[".", "--long", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("\n  ├─sock\n"), "got: {}", stdout);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let mut tree = TestTree::new();
    tree.add_file("readable/file.txt", "x");
    tree.add_file("unreadable/hidden.txt", "x");
    tree.set_mode("unreadable", 0o000);

    // Privileged users bypass permission checks
    if fs::read_dir(tree.path().join("unreadable")).is_ok() {
        return;
    }

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success, "unreadable directories are not fatal");
    assert!(stdout.contains("unreadable"), "directory itself renders");
    assert!(!stdout.contains("hidden.txt"), "children do not appear");
    assert!(stdout.contains("file.txt"));
}

#[test]
fn test_unsearchable_directory_children_unstatable() {
    let mut tree = TestTree::new();
    tree.add_file("listonly/inner.txt", "x");
    tree.set_mode("listonly", 0o644);

    if fs::metadata(tree.path().join("listonly/inner.txt")).is_ok() {
        return;
    }

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[".", "--color", "never"]);
    assert!(success);
    let inner = stdout.lines().find(|l| l.ends_with("inner.txt")).unwrap();
    assert!(inner.starts_with('?'), "got: {:?}", inner);
}

#[test]
fn test_verbose_logs_skipped_entries() {
    let tree = TestTree::new();
    tree.add_symlink("nowhere", "dangling");

    let (_stdout, stderr, success) =
        run_lstree(tree.path(), &[".", "-v", "--color", "never"]);
    assert!(success);
    assert!(stderr.contains("dangling"), "stderr: {}", stderr);
}

// ============================================================================
// Non-UTF-8 Names
// ============================================================================

#[test]
fn test_json_walks_past_non_utf8_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("z.txt", "z");
    fs::write(tree.path().join(OsStr::from_bytes(b"bad\xffname")), "x")
        .expect("Failed to write non-UTF-8 file");

    let (stdout, stderr, success) = run_lstree(tree.path(), &[".", "--json"]);
    assert!(success, "stderr: {}", stderr);

    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("every line is valid JSON"))
        .collect();
    assert_eq!(values.len(), 4);
    assert_eq!(values[2]["name"], "bad\u{FFFD}name");
    assert_eq!(values[3]["name"], "z.txt");
}

// ============================================================================
// Root Failures
// ============================================================================

#[test]
fn test_nonexistent_root() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_lstree(tree.path(), &["does-not-exist"]);
    assert!(!success);
    assert!(stdout.is_empty(), "no tree output: {}", stdout);
    assert!(stderr.contains("cannot access 'does-not-exist'"), "stderr: {}", stderr);
}

#[test]
fn test_file_as_root() {
    let tree = TestTree::new();
    tree.add_file("single.txt", "x");

    let (stdout, _stderr, success) =
        run_lstree(tree.path(), &["single.txt", "--color", "never"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with('-'));
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) =
        run_lstree(tree.path(), &["empty", "--summary", "--color", "never"]);
    assert!(success);
    assert!(stdout.ends_with("0 directories, 0 files\n"), "got: {}", stdout);
}
