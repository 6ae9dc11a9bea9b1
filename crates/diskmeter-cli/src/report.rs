//! Tabular report — per-entry size and share of used disk space.

use diskmeter_core::model::size::{format_count, format_size};
use diskmeter_core::ScanResult;
use std::io::{self, Write};
use std::path::Path;

/// Write the analysis table for one pass: volume summary, then one row per
/// entry in the result's own order with its share of the volume's used
/// bytes.
pub fn show_analysis(base: &Path, result: &ScanResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nAnalyzed: {}", base.display())?;
    writeln!(out, "Total disk size: {}", format_size(result.disk_total))?;
    writeln!(out, "Used: {}", format_size(result.disk_used))?;
    writeln!(out, "Free: {}\n", format_size(result.disk_free))?;

    writeln!(out, "{:<30} {:>10} {:>12}", "Directory", "Size", "% of Used")?;
    writeln!(out, "{}", "-".repeat(55))?;

    for entry in &result.entries {
        let percent = if result.disk_used > 0 {
            entry.size as f64 / result.disk_used as f64 * 100.0
        } else {
            0.0
        };
        writeln!(
            out,
            "{:<30} {:>10} {:>11.2}%",
            entry.name,
            format_size(entry.size),
            percent
        )?;
    }

    writeln!(
        out,
        "\n{} items, {} collected in {:.4} s",
        format_count(result.item_count as u64),
        format_size(result.total_size_collected),
        result.elapsed.as_secs_f64()
    )?;
    Ok(())
}
