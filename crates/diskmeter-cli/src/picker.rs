//! Drive selection — numbered prompt over the mounted volumes.

use anyhow::Context;
use diskmeter_core::model::size::format_size;
use diskmeter_core::platform::{enumerate_drives, DriveInfo};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Pick a mounted volume to scan.
///
/// A single candidate is selected automatically. Otherwise volumes are
/// listed with their usage and the user picks by number; `exit` returns
/// `None`. Invalid input re-prompts.
pub fn select_drive(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<PathBuf>> {
    select_from(&enumerate_drives(), input, out)
}

/// Selection over an explicit candidate list.
///
/// An empty list ends the session immediately — there is nothing a prompt
/// loop could ever accept.
fn select_from(
    drives: &[DriveInfo],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<PathBuf>> {
    match drives {
        [] => {
            writeln!(out, "No drives found.")?;
            return Ok(None);
        }
        [only] => return Ok(Some(only.path.clone())),
        _ => {}
    }

    writeln!(out, "Multiple drives found. Select one or type 'exit' to quit.")?;
    for (i, drive) in drives.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, describe(drive))?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading drive choice")?;
        if read == 0 {
            // stdin closed — treat like exit.
            return Ok(None);
        }
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=drives.len()).contains(&n) => {
                return Ok(Some(drives[n - 1].path.clone()));
            }
            _ => writeln!(out, "Invalid drive. Try again.")?,
        }
    }
}

fn describe(drive: &DriveInfo) -> String {
    format!(
        "{} ({} used of {})",
        drive.path.display(),
        format_size(drive.usage.used),
        format_size(drive.usage.total)
    )
}
