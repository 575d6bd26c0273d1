//! Edge case and error handling tests for extscan


use harness::{TestTree, run_extscan};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn json_scan(tree: &TestTree, root: &str) -> serde_json::Value {
    let (stdout, stderr, success) = run_extscan(tree.path(), &["--json", root]);
    assert!(success, "extscan failed: {}", stderr);
    serde_json::from_str(&stdout).expect("stdout is JSON")
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_broken_symlink_excluded() {
    let tree = TestTree::new();
    tree.add_sized("real.rs", 4);
    symlink("nonexistent.rs", tree.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    let value = json_scan(&tree, ".");
    assert_eq!(value["file_count"], 1);
    assert_eq!(value["extensions"][".rs"]["count"], 1);
    assert_eq!(value["extensions"][".rs"]["bytes"], 4);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.rs", "fn file() {}");
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let value = json_scan(&tree, ".");
    assert_eq!(value["file_count"], 1);
    // subdir + the link, which is never descended into
    assert_eq!(value["directory_count"], 2);
}

#[test]
fn test_self_referential_symlink() {
    let tree = TestTree::new();
    tree.add_file("ok.txt", "ok");
    symlink("loop", tree.path().join("loop")).expect("Failed to create symlink");

    let value = json_scan(&tree, ".");
    assert_eq!(value["file_count"], 1);
}

#[test]
fn test_symlinked_root_is_scanned() {
    let tree = TestTree::new();
    tree.add_sized("target/a.log", 3);
    symlink("target", tree.path().join("alias")).expect("Failed to create symlink");

    let value = json_scan(&tree, "alias");
    assert_eq!(value["extensions"][".log"]["bytes"], 3);
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let tree = TestTree::new();
    tree.add_file("readable/file.rs", "fn readable() {}");

    let unreadable = tree.add_dir("unreadable");
    fs::write(unreadable.join("hidden.rs"), "fn hidden() {}").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    let (stdout, _stderr, success) = run_extscan(tree.path(), &["--json", "."]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "extscan should handle unreadable directories gracefully");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["directory_count"], 2);
    // hidden.rs is only visible when running with elevated privileges
    let rs = value["extensions"][".rs"]["count"].as_u64().unwrap();
    assert!((1..=2).contains(&rs));
}

// ============================================================================
// Naming Edge Cases
// ============================================================================

#[test]
fn test_mixed_case_extensions_merge() {
    let tree = TestTree::new();
    tree.add_sized("upper/A.TXT", 1);
    tree.add_sized("lower/a.txt", 2);
    tree.add_sized("Mixed.TxT", 3);

    let value = json_scan(&tree, ".");
    let extensions = value["extensions"].as_object().unwrap();
    assert_eq!(extensions.len(), 1);
    assert_eq!(value["extensions"][".txt"]["count"], 3);
    assert_eq!(value["extensions"][".txt"]["bytes"], 6);
}

#[test]
fn test_extensionless_and_dotfiles_share_label() {
    let tree = TestTree::new();
    tree.add_file("README", "r");
    tree.add_file("Makefile", "m");
    tree.add_file(".bashrc", "b");
    tree.add_file("LICENSE", "l");

    let value = json_scan(&tree, ".");
    assert_eq!(value["extensions"]["no extension"]["count"], 4);
    assert_eq!(value["extensions"].as_object().unwrap().len(), 1);
}

#[test]
fn test_filename_with_spaces_and_unicode() {
    let tree = TestTree::new();
    tree.add_file("my file.Doc", "a");
    tree.add_file("日本語/ファイル.md", "b");
    tree.add_file("émoji 🎉.PNG", "c");

    let value = json_scan(&tree, ".");
    assert_eq!(value["extensions"][".doc"]["count"], 1);
    assert_eq!(value["extensions"][".md"]["count"], 1);
    assert_eq!(value["extensions"][".png"]["count"], 1);
}

#[test]
fn test_multi_dot_names_use_last_suffix() {
    let tree = TestTree::new();
    tree.add_file("backup.tar.gz", "x");
    tree.add_file("trailing.", "y");

    let value = json_scan(&tree, ".");
    assert_eq!(value["extensions"][".gz"]["count"], 1);
    assert_eq!(value["extensions"]["."]["count"], 1);
}

// ============================================================================
// Size and Shape Edge Cases
// ============================================================================

#[test]
fn test_empty_root() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_extscan(tree.path(), &["--color", "never", "empty"]);
    assert!(success);
    assert!(stdout.contains("Number of directories: 0"));
    assert!(stdout.contains("Number of files: 0"));
}

#[test]
fn test_empty_files_counted_with_zero_size() {
    let tree = TestTree::new();
    tree.add_file("a.lock", "");
    tree.add_file("b.lock", "");

    let value = json_scan(&tree, ".");
    assert_eq!(value["extensions"][".lock"]["count"], 2);
    assert_eq!(value["extensions"][".lock"]["bytes"], 0);
}

#[test]
fn test_very_deep_nesting() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/e/f/g/h/deep.rs", "fn deep() {}");

    let value = json_scan(&tree, ".");
    assert_eq!(value["directory_count"], 8);
    assert_eq!(value["file_count"], 1);
}

#[test]
fn test_many_files_in_directory() {
    let tree = TestTree::new();
    for i in 0..250 {
        tree.add_file(&format!("file_{:03}.rs", i), "fn f() {}");
    }

    let (stdout, _stderr, success) = run_extscan(tree.path(), &["--color", "never", "."]);
    assert!(success);
    assert!(stdout.contains("Number of files: 250"), "{}", stdout);
}

#[test]
fn test_counts_sum_to_file_count() {
    let tree = TestTree::new();
    for (i, ext) in ["rs", "py", "md", "json", "toml", "RS", "Py"].iter().enumerate() {
        for j in 0..=i {
            tree.add_file(&format!("d{i}/f{j}.{ext}"), "content");
        }
    }

    let value = json_scan(&tree, ".");
    let sum: u64 = value["extensions"]
        .as_object()
        .unwrap()
        .values()
        .map(|t| t["count"].as_u64().unwrap())
        .sum();
    assert_eq!(sum, value["file_count"].as_u64().unwrap());
    assert_eq!(sum, 28);
}

#[test]
fn test_repeated_scans_identical() {
    let tree = TestTree::new();
    tree.add_sized("x/one.bin", 300);
    tree.add_sized("y/two.bin", 200);
    tree.add_file("z/README", "z");

    assert_eq!(json_scan(&tree, "."), json_scan(&tree, "."));
}
