/// Diskmeter Core — size aggregation, data model, and platform queries.
///
/// This crate contains all business logic with zero terminal dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Scan result types and size formatting.
/// - [`walker`] — Recursive, error-absorbing directory size walker.
/// - [`aggregate`] — Per-child size aggregation with sequential and
///   bounded-concurrent strategies.
/// - [`platform`] — Volume usage statistics and mounted-drive enumeration.
pub mod aggregate;
pub mod model;
pub mod platform;
pub mod walker;

pub use aggregate::{aggregate, ScanError, Strategy};
pub use model::{Entry, ScanResult};
