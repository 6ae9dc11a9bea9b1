//! CLI argument parsing using clap derive macros.

use clap::Parser;
use diskmeter_core::Strategy;
use std::path::PathBuf;

/// Per-directory disk usage analyser.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "diskmeter",
    version,
    about = "Per-directory disk usage analyser",
    long_about = "Sums the disk usage of each immediate child of a directory, \
                  deduplicating aliased paths and tolerating unreadable entries.\n\n\
                  Without PATH, mounted drives are listed for selection. After each \
                  analysis an interactive menu allows drilling into subdirectories.",
    after_help = "EXAMPLES:\n    \
        diskmeter /var\n    \
        diskmeter /var -w 8 --no-chart\n    \
        diskmeter --sequential --no-interactive /tmp\n    \
        diskmeter --bench-log runs.csv /"
)]
pub struct CliArgs {
    /// Directory to analyse (defaults to interactive drive selection)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Use the single-threaded sizing strategy
    #[arg(long)]
    pub sequential: bool,

    /// Worker pool size for the concurrent strategy (default: logical CPUs)
    #[arg(short = 'w', long, value_name = "NUM")]
    pub workers: Option<usize>,

    /// Skip the bar chart after each analysis
    #[arg(long)]
    pub no_chart: bool,

    /// Rows per bar-chart page
    #[arg(long, default_value_t = 20, value_name = "ROWS")]
    pub page_size: usize,

    /// Benchmark CSV file, appended to after each analysis
    #[arg(long, default_value = "benchmark_log.csv", value_name = "FILE")]
    pub bench_log: PathBuf,

    /// Disable benchmark logging
    #[arg(long)]
    pub no_bench: bool,

    /// Analyse the starting path once and exit (no navigation menu)
    #[arg(long)]
    pub no_interactive: bool,
}

impl CliArgs {
    /// The core strategy these flags select.
    pub fn strategy(&self) -> Strategy {
        if self.sequential {
            Strategy::Sequential
        } else {
            Strategy::Concurrent {
                workers: self.workers,
            }
        }
    }

    /// Label recorded in the benchmark log.
    pub fn strategy_label(&self) -> &'static str {
        if self.sequential {
            "sequential"
        } else {
            "concurrent"
        }
    }
}
