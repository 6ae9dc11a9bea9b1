/// Data model for diskmeter scan results.
///
/// Re-exports the result types and size-formatting helpers.
pub mod entry;
pub mod size;

pub use entry::{Entry, ScanResult};
