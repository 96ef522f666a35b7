//! Serializable view of the sorter's state, for debugging and tests.

use serde::Serialize;

/// Point-in-time state of an attached sorter.
///
/// Exported to JavaScript through `serde-wasm-bindgen`; native callers
/// can serialize it with `serde_json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSnapshot {
    /// Active sort column, if any.
    pub order_by: Option<usize>,
    /// `""`, `"asc"`, or `"desc"` — mirrors the table's `order` attribute.
    pub order: String,
    /// Number of rows in the cached snapshot (0 before the cache is built).
    pub row_count: usize,
    /// Number of rows classed as hidden entries.
    pub hidden_rows: usize,
    /// Checkbox state, when a visibility toggle is present.
    pub show_hidden: Option<bool>,
}
