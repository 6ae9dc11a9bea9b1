/// Diskmeter CLI — terminal frontend over the core aggregation engine.
///
/// Everything here is a consumer of [`diskmeter_core::ScanResult`]: the
/// tabular report, the bar chart, the benchmark CSV log, and the
/// interactive navigation loop. None of it mutates a result or reaches
/// back into the scan.
pub mod args;
pub mod bench;
pub mod chart;
pub mod navigate;
pub mod picker;
pub mod report;

use anyhow::Context;
use args::CliArgs;
use navigate::Outcome;
use std::io;

/// Top-level driver: resolve the starting path (flag or drive picker),
/// then hand off to the navigation loop. A `Restart` outcome returns to
/// drive selection, matching the original analyzer's behaviour of backing
/// out past the starting directory.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        let base = match &args.path {
            Some(path) => path.clone(),
            None => match picker::select_drive(&mut input, &mut out)? {
                Some(path) => path,
                None => return Ok(()),
            },
        };

        if !base.is_dir() {
            anyhow::bail!("{} is not a directory", base.display());
        }

        let outcome = navigate::run_loop(&base, &args, &mut input, &mut out)
            .with_context(|| format!("session over {}", base.display()))?;
        match outcome {
            Outcome::Exit => return Ok(()),
            // Only meaningful without a fixed --path; with one, backing
            // out of the start means we are done.
            Outcome::Restart if args.path.is_none() => continue,
            Outcome::Restart => return Ok(()),
        }
    }
}
