//! Terminal bar chart — paginated, size-sorted horizontal bars.
//!
//! Sorting lives here, not in the core: `ScanResult.entries` stays in
//! submission order and the chart takes its own sorted copy.

use diskmeter_core::model::size::format_size;
use diskmeter_core::ScanResult;

/// Widest bar, in characters.
const BAR_WIDTH: usize = 40;
/// Name column width; longer names are truncated with an ellipsis.
const NAME_WIDTH: usize = 30;

/// Render the chart as pages of `page_size` rows, largest entries first.
/// Bars are scaled against the single largest entry so pages remain
/// comparable. Returns no pages for an empty result.
pub fn render_chart(result: &ScanResult, page_size: usize) -> Vec<String> {
    if result.entries.is_empty() || page_size == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<(&str, u64)> = result
        .entries
        .iter()
        .map(|e| (e.name.as_str(), e.size))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let max_size = sorted[0].1.max(1);
    let total_pages = sorted.len().div_ceil(page_size);

    sorted
        .chunks(page_size)
        .enumerate()
        .map(|(page, chunk)| {
            let mut text = format!("Disk usage — page {}/{}\n", page + 1, total_pages);
            for (name, size) in chunk {
                let filled = ((*size as f64 / max_size as f64) * BAR_WIDTH as f64).round() as usize;
                // A non-zero entry always gets at least one tick.
                let filled = if *size > 0 { filled.max(1) } else { 0 };
                text.push_str(&format!(
                    "{:<name_w$} {:<bar_w$} {}\n",
                    truncate_name(name),
                    "█".repeat(filled),
                    format_size(*size),
                    name_w = NAME_WIDTH,
                    bar_w = BAR_WIDTH
                ));
            }
            text
        })
        .collect()
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut out: String = name.chars().take(NAME_WIDTH - 1).collect();
    out.push('…');
    out
}
