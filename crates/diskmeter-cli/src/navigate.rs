//! Interactive navigation loop — a thin read-eval loop over the core.
//!
//! Analyse the current directory, offer its subdirectories as a numbered
//! menu, drill in on selection, back out with `0`, quit with `exit`. An
//! unreadable directory steps back to the parent rather than ending the
//! session.

use crate::args::CliArgs;
use crate::{bench, chart, report};
use diskmeter_core::{aggregate, ScanError};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// How a navigation session ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// User asked to quit.
    Exit,
    /// User backed out past the starting directory — the caller may
    /// restart from drive selection.
    Restart,
}

/// One parsed menu input.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Exit,
    Back,
    Select(usize),
    Invalid,
}

fn parse_choice(input: &str, dir_count: usize) -> Choice {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        return Choice::Exit;
    }
    match trimmed.parse::<usize>() {
        Ok(0) => Choice::Back,
        Ok(n) if n <= dir_count => Choice::Select(n - 1),
        _ => Choice::Invalid,
    }
}

/// Run one interactive session starting at `start`.
pub fn run_loop(
    start: &Path,
    args: &CliArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    analyze_and_report(start, args, input, out)?;
    if args.no_interactive {
        return Ok(Outcome::Exit);
    }

    // Visited directories, bottom of the stack = starting directory.
    let mut trail: Vec<PathBuf> = Vec::new();
    let mut path = start.to_path_buf();

    loop {
        writeln!(out, "{}", "-".repeat(55))?;

        let dirs = match list_subdirectories(&path) {
            Ok(dirs) => dirs,
            Err(err) => {
                writeln!(out, "Error accessing directory: {err}")?;
                match trail.pop() {
                    Some(previous) => {
                        path = previous;
                        continue;
                    }
                    None => return Ok(Outcome::Exit),
                }
            }
        };

        if dirs.is_empty() {
            writeln!(
                out,
                "No more subdirectories here. (\"exit\" to end, \"0\" to go back)"
            )?;
        } else {
            for (i, dir) in dirs.iter().enumerate() {
                writeln!(out, "{}: {}", i + 1, dir.display())?;
            }
            writeln!(
                out,
                "Select a directory number to analyze (\"exit\" to end, \"0\" to go back):"
            )?;
        }

        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Exit);
        }

        match parse_choice(&line, dirs.len()) {
            Choice::Exit => return Ok(Outcome::Exit),
            Choice::Back => match trail.pop() {
                Some(previous) => path = previous,
                None => return Ok(Outcome::Restart),
            },
            Choice::Select(index) => {
                trail.push(path.clone());
                path = path.join(&dirs[index]);
                analyze_and_report(&path, args, input, out)?;
            }
            Choice::Invalid => {
                writeln!(out, "\"{}\" is not a valid choice. Try again.", line.trim())?;
            }
        }
    }
}

/// Analyse one directory and feed the result to the reporting
/// collaborators. A `DirectoryUnreadable` failure is reported to the user
/// and the session continues.
fn analyze_and_report(
    path: &Path,
    args: &CliArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let result = match aggregate(path, args.strategy()) {
        Ok(result) => result,
        Err(err @ ScanError::DirectoryUnreadable { .. }) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };

    report::show_analysis(path, &result, out)?;

    if !args.no_chart {
        let pages = chart::render_chart(&result, args.page_size);
        let last = pages.len().saturating_sub(1);
        for (i, page) in pages.iter().enumerate() {
            writeln!(out, "\n{page}")?;
            if i < last {
                write!(out, "Press Enter to show next page...")?;
                out.flush()?;
                let mut discard = String::new();
                if input.read_line(&mut discard)? == 0 {
                    break;
                }
            }
        }
    }

    if !args.no_bench {
        let record =
            bench::BenchRecord::from_result(&result, path, args.strategy_label(), args.workers);
        if let Err(err) = bench::log_benchmark(&args.bench_log, &record) {
            // Benchmark logging is best-effort; never fail the session.
            warn!("benchmark log failed: {err:#}");
        }
    }

    Ok(())
}

/// Immediate subdirectory names of `path`, in listing order. Unreadable
/// entries are skipped; symlinked directories are offered like any other
/// (the aggregation pass deduplicates aliases itself).
fn list_subdirectories(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for dirent in fs::read_dir(path)? {
        let Ok(dirent) = dirent else { continue };
        if dirent.path().is_dir() {
            dirs.push(PathBuf::from(dirent.file_name()));
        }
    }
    Ok(dirs)
}
