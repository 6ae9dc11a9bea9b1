/// Sizing phase of an aggregation pass.
///
/// Each surviving child is one independent unit of work with an explicit
/// outcome: `Ok(Some(size))` to include, `Ok(None)` for silent drops
/// (neither file nor directory), `Err` for a stat failure the aggregator
/// logs and drops. No unit can abort a sibling or the pass.
use super::filter::Candidate;
use crate::walker;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Upper bound on the worker pool, mirroring the listing fan-out any sane
/// filesystem can sustain. Requests above this are clamped, not rejected.
const MAX_WORKERS: usize = 512;

pub(crate) type SizeOutcome = Result<Option<u64>, io::Error>;

/// Size one child. Stat follows symlinks, so a surviving link to a
/// directory is sized as that directory (its alias was already removed by
/// the filtering phase).
fn size_one(path: &Path) -> SizeOutcome {
    let meta = fs::metadata(path)?;
    if meta.is_dir() {
        Ok(Some(walker::directory_size(path)))
    } else if meta.is_file() {
        Ok(Some(meta.len()))
    } else {
        Ok(None)
    }
}

/// Sequential strategy: one unit at a time, in submission order.
pub(crate) fn size_sequential(candidates: &[Candidate]) -> Vec<SizeOutcome> {
    candidates.iter().map(|c| size_one(&c.path)).collect()
}

/// Concurrent strategy: units distributed across a pool of `workers`
/// threads built for this call alone and torn down when it returns.
///
/// Rayon's indexed parallel collect writes every unit's outcome into the
/// slot matching its submission index, so the returned order is identical
/// to the sequential strategy no matter which worker finishes first. The
/// collect is a full barrier — no partial results escape.
pub(crate) fn size_concurrent(
    candidates: &[Candidate],
    workers: Option<usize>,
) -> Vec<SizeOutcome> {
    let workers = resolve_workers(workers);

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("diskmeter-worker-{i}"))
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            // Thread spawning failed (resource limits). The pass still has
            // to produce a report, so fall back to the sequential path.
            warn!("worker pool unavailable ({err}); sizing sequentially");
            return size_sequential(candidates);
        }
    };

    pool.install(|| candidates.par_iter().map(|c| size_one(&c.path)).collect())
}

/// Resolve the requested worker count: caller-chosen when positive,
/// logical CPU count otherwise, clamped to [`MAX_WORKERS`].
fn resolve_workers(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n >= 1 => n.min(MAX_WORKERS),
        _ => num_cpus::get().clamp(1, MAX_WORKERS),
    }
}
