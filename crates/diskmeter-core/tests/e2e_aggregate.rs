//! End-to-end aggregation tests.
//!
//! These tests exercise the real `aggregate` code paths against a real
//! temporary filesystem, verifying listing, alias deduplication, skip
//! filtering, both sizing strategies, and partial-failure behaviour.
//!
//! **Why a `tests/` integration test (not unit test)?**
//!
//! The aggregator's contract is entirely about observable filesystem
//! behaviour — canonical path resolution, symlink handling, stat failures.
//! Mocking the OS interface would test the mock; an integration test with
//! `tempfile` exercises every code path with zero mocking.

use diskmeter_core::{aggregate, ScanError, ScanResult, Strategy};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// The reference layout from the aggregation contract:
///
/// ```text
/// base/
///   a.txt   (100 bytes)
///   b.tmp   (50 bytes, skip-listed)
///   c/
///     inner.bin (300 bytes)
/// ```
fn build_reference_tree(base: &Path) {
    write_bytes(&base.join("a.txt"), 100);
    write_bytes(&base.join("b.tmp"), 50);
    let c = base.join("c");
    fs::create_dir(&c).unwrap();
    write_bytes(&c.join("inner.bin"), 300);
}

/// Sorted `(name, size)` pairs for order-independent comparison.
fn name_size_pairs(result: &ScanResult) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = result
        .entries
        .iter()
        .map(|e| (e.name.to_string(), e.size))
        .collect();
    pairs.sort();
    pairs
}

/// The structural invariants every pass must uphold.
fn assert_invariants(result: &ScanResult) {
    assert_eq!(result.item_count, result.entries.len());
    assert_eq!(
        result.total_size_collected,
        result.entries.iter().map(|e| e.size).sum::<u64>()
    );
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// The reference tree must produce exactly {a.txt: 100, c: 300}; the .tmp
/// file is never sized or counted.
#[test]
fn reference_tree_sequential() {
    let tmp = TempDir::new().unwrap();
    build_reference_tree(tmp.path());

    let result = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    assert_invariants(&result);
    assert_eq!(
        name_size_pairs(&result),
        vec![("a.txt".to_string(), 100), ("c".to_string(), 300)]
    );
    assert_eq!(result.item_count, 2);
    assert_eq!(result.total_size_collected, 400);
}

/// Both strategies must agree on the same tree, entry for entry, for every
/// pool size — including a single worker.
#[test]
fn strategies_agree_for_all_pool_sizes() {
    let tmp = TempDir::new().unwrap();
    build_reference_tree(tmp.path());
    for i in 0..10 {
        let d = tmp.path().join(format!("dir{i}"));
        fs::create_dir(&d).unwrap();
        write_bytes(&d.join("payload.bin"), (i + 1) * 1_000);
    }

    let sequential = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    for workers in [1, 2, 4, 8] {
        let concurrent = aggregate(
            tmp.path(),
            Strategy::Concurrent {
                workers: Some(workers),
            },
        )
        .unwrap();
        assert_invariants(&concurrent);
        assert_eq!(
            concurrent.entries, sequential.entries,
            "strategy mismatch at workers={workers}"
        );
        assert_eq!(
            concurrent.total_size_collected,
            sequential.total_size_collected
        );
    }
}

/// Result order is submission order, not completion order: with wildly
/// uneven per-child sizing latency and few workers, repeated concurrent
/// passes must keep producing the identical entry sequence.
#[test]
fn concurrent_order_is_stable_under_uneven_latency() {
    let tmp = TempDir::new().unwrap();
    // One expensive directory among many cheap ones: the expensive walk
    // finishes last but its entry must stay at its submission position.
    let heavy = tmp.path().join("heavy");
    fs::create_dir(&heavy).unwrap();
    for i in 0..400 {
        write_bytes(&heavy.join(format!("f{i:04}.bin")), 64);
    }
    for i in 0..12 {
        let d = tmp.path().join(format!("light{i:02}"));
        fs::create_dir(&d).unwrap();
        write_bytes(&d.join("one.bin"), 8);
    }

    let baseline = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    for run in 0..5 {
        let result = aggregate(tmp.path(), Strategy::Concurrent { workers: Some(2) }).unwrap();
        assert_eq!(
            result.entries, baseline.entries,
            "entry order drifted on run {run}"
        );
    }
}

/// Repeated passes over an unchanged tree must be identical apart from
/// elapsed time.
#[test]
fn aggregation_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    build_reference_tree(tmp.path());

    let first = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    let second = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    assert_eq!(first.entries, second.entries);
    assert_eq!(first.total_size_collected, second.total_size_collected);
    assert_eq!(first.item_count, second.item_count);
}

/// An empty base directory is a successful, empty report — not an error.
#[test]
fn empty_directory_succeeds() {
    let tmp = TempDir::new().unwrap();

    let result = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.item_count, 0);
    assert_eq!(result.total_size_collected, 0);
}

/// A missing base path is the one fatal condition.
#[test]
fn missing_base_path_is_directory_unreadable() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("never-created");

    let err = aggregate(&gone, Strategy::Sequential).unwrap_err();
    match err {
        ScanError::DirectoryUnreadable { path, .. } => assert_eq!(path, gone),
    }
}

/// Skip filtering is case-insensitive and applies before sizing.
#[test]
fn skip_extensions_match_any_case() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("upper.TMP"), 10);
    write_bytes(&tmp.path().join("mixed.Tmp"), 20);
    write_bytes(&tmp.path().join("lower.tmp"), 30);
    write_bytes(&tmp.path().join("keep.txt"), 40);

    let result = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    assert_eq!(name_size_pairs(&result), vec![("keep.txt".to_string(), 40)]);
    assert_eq!(result.total_size_collected, 40);
}

/// A skip-listed directory is filtered exactly like a skip-listed file.
#[test]
fn skip_extensions_apply_to_directories() {
    let tmp = TempDir::new().unwrap();
    let skipped = tmp.path().join("build.tmp");
    fs::create_dir(&skipped).unwrap();
    write_bytes(&skipped.join("artifact.o"), 9_999);
    write_bytes(&tmp.path().join("keep.txt"), 1);

    let result = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    assert_eq!(name_size_pairs(&result), vec![("keep.txt".to_string(), 1)]);
}

/// Volume statistics for the containing filesystem are embedded in the
/// result.
#[test]
fn volume_statistics_are_populated() {
    let tmp = TempDir::new().unwrap();

    let result = aggregate(tmp.path(), Strategy::Sequential).unwrap();
    assert!(result.disk_total > 0);
    assert!(result.disk_used <= result.disk_total);
    assert!(result.disk_free <= result.disk_total);
}

/// A directory and a symlink aliasing it produce exactly one entry with
/// the directory's size, whichever of the two is listed first.
#[cfg(unix)]
#[test]
fn aliased_children_are_deduplicated() {
    let tmp = TempDir::new().unwrap();
    let c = tmp.path().join("c");
    fs::create_dir(&c).unwrap();
    write_bytes(&c.join("inner.bin"), 300);
    std::os::unix::fs::symlink(&c, tmp.path().join("link")).unwrap();

    for strategy in [Strategy::Sequential, Strategy::Concurrent { workers: Some(2) }] {
        let result = aggregate(tmp.path(), strategy).unwrap();
        assert_invariants(&result);
        assert_eq!(result.item_count, 1, "alias must collapse to one entry");
        let entry = &result.entries[0];
        assert!(
            entry.name == "c" || entry.name == "link",
            "unexpected survivor {:?}",
            entry.name
        );
        assert_eq!(entry.size, 300);
    }
}

/// A child whose stat fails (dangling symlink — the race-deleted-file
/// case) is dropped without failing the pass or disturbing its siblings.
#[cfg(unix)]
#[test]
fn unstatable_child_is_dropped_not_fatal() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("one.txt"), 11);
    write_bytes(&tmp.path().join("two.txt"), 22);
    write_bytes(&tmp.path().join("three.txt"), 33);
    std::os::unix::fs::symlink("/nonexistent/target", tmp.path().join("gone")).unwrap();

    let result = aggregate(tmp.path(), Strategy::Concurrent { workers: Some(2) }).unwrap();
    assert_invariants(&result);
    assert_eq!(result.item_count, 3);
    assert_eq!(result.total_size_collected, 66);
}

/// A permission-denied subdirectory still yields an entry — its unreadable
/// contents are absorbed as zero rather than aborting the pass.
#[cfg(unix)]
#[test]
fn unreadable_subtree_is_absorbed_as_zero() {
    use std::os::unix::fs::PermissionsExt;

    // Root bypasses permission checks; the simulation is meaningless then.
    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("readable.txt"), 77);
    let locked = tmp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_bytes(&locked.join("secret.bin"), 1_234);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let result = aggregate(tmp.path(), Strategy::Sequential).unwrap();

    // Restore so TempDir cleanup can remove the tree.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_invariants(&result);
    assert_eq!(result.item_count, 2);
    assert_eq!(
        name_size_pairs(&result),
        vec![("locked".to_string(), 0), ("readable.txt".to_string(), 77)]
    );
}
