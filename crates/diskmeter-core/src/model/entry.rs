/// Scan result types.
///
/// One [`ScanResult`] is produced per aggregation pass and is immutable to
/// consumers: reporting, charting, and benchmark logging all read from the
/// same value without copying or touching the filesystem again.
use compact_str::CompactString;
use std::time::Duration;

/// One reported child of the scanned base directory.
///
/// `name` is the basename only (NOT the full path) — full paths can be
/// reconstructed by joining onto the base path the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File or directory name, e.g. "Downloads" or "report.pdf".
    pub name: CompactString,
    /// Size in bytes. For a directory this is the recursive sum of all
    /// regular files beneath it, symlinks excluded.
    pub size: u64,
}

impl Entry {
    pub fn new(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// The complete outcome of one aggregation pass.
///
/// `entries` preserves the order in which children were submitted for
/// sizing (listing order), never completion order. Sorting by size is a
/// presentation concern and happens in the frontend.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Surviving children in submission order.
    pub entries: Vec<Entry>,

    /// Capacity of the volume containing the base path, in bytes.
    pub disk_total: u64,
    /// Bytes in use on that volume.
    pub disk_used: u64,
    /// Bytes free on that volume.
    pub disk_free: u64,

    /// Number of entries reported. Always equals `entries.len()`.
    pub item_count: usize,
    /// Sum of all entry sizes. Always equals the sum over `entries`.
    pub total_size_collected: u64,

    /// Wall-clock time for the pass (listing through assembly, excluding
    /// any presentation work).
    pub elapsed: Duration,
}

impl ScanResult {
    /// `true` when the pass reported no children at all (empty directory,
    /// or everything was skipped/deduplicated/dropped).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
