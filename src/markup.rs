//! Markup vocabulary recognized on the listing page.
//!
//! The page is rendered server-side; this module pins down the ids,
//! attributes, and class names the sorter reads and writes so both
//! sides agree on the contract.

// =============================================================================
// Element ids
// =============================================================================

/// The listing table.
pub const TABLE_ID: &str = "UI_fileTable";

/// The table body holding one row per directory entry.
pub const BODY_ID: &str = "UI_fileList";

/// Container of the "show hidden" checkbox. Optional; revealed only when
/// the listing actually contains hidden entries.
pub const TOGGLE_ID: &str = "UI_showHidden";

// =============================================================================
// Attributes read from the page
// =============================================================================

/// Per-cell attribute carrying the authoritative sort key, overriding
/// the cell's displayed text.
pub const SORT_KEY_ATTR: &str = "sortable-data";

// =============================================================================
// Attributes and classes written by the sorter
// =============================================================================

/// Table attribute recording the active sort column index.
pub const ORDER_BY_ATTR: &str = "order-by";

/// Table attribute recording the sort direction: `""`, `"asc"`, `"desc"`.
pub const ORDER_ATTR: &str = "order";

/// Row class marking an entry as hidden-eligible.
pub const HIDDEN_ROW_CLASS: &str = "hidden-object";

/// Table class that suppresses rows classed [`HIDDEN_ROW_CLASS`].
pub const FILTER_CLASS: &str = "remove-hidden";
