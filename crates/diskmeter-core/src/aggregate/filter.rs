/// Listing and filtering phase of an aggregation pass.
///
/// Runs entirely before any sizing work starts, on the calling thread.
/// The canonical-path set used for alias deduplication is therefore fully
/// populated before a worker ever runs, so the concurrent strategy never
/// needs to lock it.
use super::ScanError;
use compact_str::CompactString;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File extensions excluded from results entirely — never sized, never
/// counted. Matched case-insensitively against the final extension of the
/// child's own name, for files and directories alike.
pub const SKIP_EXTENSIONS: &[&str] = &["tmp"];

/// A child that survived deduplication and skip filtering and is waiting
/// to be sized.
pub(crate) struct Candidate {
    /// Basename, as reported in the final result.
    pub name: CompactString,
    /// Full path used for sizing.
    pub path: PathBuf,
}

/// List the immediate children of `base` in listing order, dropping
/// aliases of already-seen canonical paths and skip-listed extensions.
///
/// Only this listing itself can fail; per-child canonicalisation failures
/// fall back to the raw path (the later stat will drop anything truly
/// unreadable).
pub(crate) fn list_candidates(base: &Path) -> Result<Vec<Candidate>, ScanError> {
    let reader = fs::read_dir(base).map_err(|source| ScanError::DirectoryUnreadable {
        path: base.to_path_buf(),
        source,
    })?;

    // Pass-scoped: resolved paths seen so far. Two directory entries that
    // alias the same target (e.g. a symlink pointing at a sibling) must
    // produce exactly one result entry.
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    for dirent in reader {
        let dirent = match dirent {
            Ok(d) => d,
            Err(err) => {
                warn!("unreadable entry under {}: {err}", base.display());
                continue;
            }
        };

        let path = dirent.path();
        let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if !seen.insert(canonical) {
            // Alias of an earlier sibling. Not an error, not reported.
            debug!("alias skipped: {}", path.display());
            continue;
        }

        let name = CompactString::new(dirent.file_name().to_string_lossy());
        if is_skipped(&name) {
            // Filtered before sizing — never pay for a walk we will
            // discard anyway.
            continue;
        }

        candidates.push(Candidate { name, path });
    }

    Ok(candidates)
}

/// Whether a child name's extension is on the skip list.
pub(crate) fn is_skipped(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SKIP_EXTENSIONS
                .iter()
                .any(|skip| ext.eq_ignore_ascii_case(skip))
        })
}
