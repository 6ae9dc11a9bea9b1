/// Directory aggregation — per-child disk usage for a base directory.
///
/// One call to [`aggregate`] is one pass: list the immediate children,
/// deduplicate aliased paths, drop skip-listed extensions, size each
/// survivor (files by direct stat, directories via the recursive
/// [`walker`](crate::walker)), and assemble an ordered [`ScanResult`].
///
/// Two strategies share identical semantics:
/// - **Sequential** — one child at a time in listing order; the simplest
///   correctness baseline.
/// - **Concurrent** — children fan out across a fixed-size worker pool
///   built for this one call; results are collected in submission order
///   regardless of which worker finishes first, so output is reproducible
///   under any scheduling.
///
/// Only a failure to list the base path itself fails the call. Every
/// per-child failure is absorbed: the child is dropped, a warning is
/// logged, and the pass continues. A scan of a partially unreadable tree
/// still returns a (possibly incomplete) report.
mod filter;
mod sizing;

pub use filter::SKIP_EXTENSIONS;

use crate::model::{Entry, ScanResult};
use crate::platform;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How the per-child sizing work in a pass is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded, blocking, in listing order.
    Sequential,
    /// Fixed-size worker pool. `workers = None` (or a later value of 0)
    /// falls back to the number of logical CPUs.
    Concurrent { workers: Option<usize> },
}

/// The only failure an aggregation pass can surface.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Listing the base path itself failed — missing, permission denied,
    /// or not a directory. Without a child list there is nothing to report,
    /// so the caller decides whether to retry, step up a level, or abort.
    #[error("cannot list directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Run one aggregation pass over the immediate children of `base_path`.
///
/// Volume statistics for the containing filesystem are captured once per
/// call and embedded unmodified in the result. Elapsed time covers listing
/// through assembly only.
pub fn aggregate(base_path: &Path, strategy: Strategy) -> Result<ScanResult, ScanError> {
    info!("analyzing {}", base_path.display());
    let start = Instant::now();

    let candidates = filter::list_candidates(base_path)?;

    let volume = match platform::volume_usage(base_path) {
        Ok(v) => v,
        Err(err) => {
            warn!(
                "volume statistics unavailable for {}: {err}",
                base_path.display()
            );
            platform::VolumeUsage::default()
        }
    };

    let outcomes = match strategy {
        Strategy::Sequential => sizing::size_sequential(&candidates),
        Strategy::Concurrent { workers } => sizing::size_concurrent(&candidates, workers),
    };
    debug_assert_eq!(outcomes.len(), candidates.len());

    // Assembly: inclusion/exclusion of each unit's outcome is an explicit
    // branch, preserving submission order.
    let mut entries: Vec<Entry> = Vec::with_capacity(candidates.len());
    for (candidate, outcome) in candidates.into_iter().zip(outcomes) {
        match outcome {
            Ok(Some(size)) => entries.push(Entry::new(candidate.name, size)),
            // Not a regular file or directory (device, socket, fifo).
            Ok(None) => {}
            Err(err) => {
                warn!("dropping {}: {err}", candidate.path.display());
            }
        }
    }

    let total_size_collected = entries.iter().map(|e| e.size).sum();
    let item_count = entries.len();
    let elapsed = start.elapsed();

    debug!(
        "pass over {} complete: {item_count} entries, {total_size_collected} bytes in {elapsed:?}",
        base_path.display()
    );

    Ok(ScanResult {
        entries,
        disk_total: volume.total,
        disk_used: volume.used,
        disk_free: volume.free,
        item_count,
        total_size_collected,
        elapsed,
    })
}
