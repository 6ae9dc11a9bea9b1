/// Recursive directory size walker — the leaf component of aggregation.
///
/// Sums the on-disk size of every regular file reachable beneath a
/// directory without following symbolic links. Partial filesystem failure
/// (permission denied, race-removed entries, I/O errors) must never abort
/// a walk of a large tree: losing a few bytes of accuracy is preferable to
/// losing the whole report, so unreadable subtrees simply contribute zero.
///
/// Descent is strictly sequential and depth-first. Under the concurrent
/// aggregation strategy each top-level child gets its own walk on one
/// worker; there is no further fan-out inside a walk, so the worker pool
/// size bounds all parallelism in the system.
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Total size in bytes of all regular files beneath `path`.
///
/// Symbolic links contribute 0 and are not descended into. Any entry or
/// subtree that cannot be listed or stat'ed contributes 0 and the walk
/// continues; this function always succeeds.
///
/// The caller is expected to have checked that `path` is a directory;
/// behaviour for other path kinds is unspecified.
pub fn directory_size(path: &Path) -> u64 {
    let mut total: u64 = 0;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                // Typically access-denied on a subdirectory; the whole
                // subtree is silently absorbed as zero.
                debug!("walk error under {}: {err}", path.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => total += meta.len(),
            Err(err) => {
                // File vanished between listing and stat.
                debug!("stat failed for {}: {err}", entry.path().display());
            }
        }
    }

    total
}
