//! Benchmark CSV log — one appended row per analysis pass.
//!
//! The schema is owned here, not by the core, and may evolve
//! independently of the aggregation contract.

use anyhow::Context;
use chrono::Local;
use diskmeter_core::ScanResult;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;

/// One row of the benchmark log.
#[derive(Debug, Serialize)]
pub struct BenchRecord {
    /// Strategy label: "sequential" or "concurrent".
    pub version: String,
    /// Local wall-clock time the pass finished.
    pub timestamp: String,
    /// Base path analysed.
    pub path: String,
    pub item_count: usize,
    pub total_size_bytes: u64,
    pub elapsed_time_sec: f64,
    /// Requested worker count; empty for the sequential strategy.
    pub workers: Option<usize>,
}

impl BenchRecord {
    pub fn from_result(
        result: &ScanResult,
        base: &Path,
        version: &str,
        workers: Option<usize>,
    ) -> Self {
        Self {
            version: version.to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            path: base.display().to_string(),
            item_count: result.item_count,
            total_size_bytes: result.total_size_collected,
            elapsed_time_sec: result.elapsed.as_secs_f64(),
            workers,
        }
    }
}

/// Append `record` to `file`, writing the header first when the file is
/// new.
pub fn log_benchmark(file: &Path, record: &BenchRecord) -> anyhow::Result<()> {
    let write_header = !file.exists();
    let handle = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("opening benchmark log {}", file.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(handle);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}
