//! tablesort - interactive column sorting for HTML file-listing tables
//!
//! Enhances a server-rendered directory listing in the browser via
//! WebAssembly:
//! - Clickable column headers (ascending, click again for descending)
//! - Numeric-aware sort keys from a per-cell `sortable-data` attribute
//! - A "show hidden" toggle for rows classed `hidden-object`
//! - Batch DOM reorder - the body is detached, rebuilt, re-attached
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableSorter } from 'tablesort';
//! await init();
//! const sorter = TableSorter.attachToDocument();
//! sorter.orderBy(2);
//! ```

// Sorting core (target-neutral)
pub mod error;
pub mod key;
pub mod markup;
pub mod snapshot;
pub mod sorting;
pub mod visibility;

// DOM wiring (wasm32)
pub mod sorter;

use wasm_bindgen::prelude::*;

// Re-export the main sorter struct
pub use sorter::TableSorter;

pub use error::{Result, TablesortError};
pub use key::SortKey;
pub use snapshot::SortSnapshot;
pub use sorting::{sort_permutation, Reorder, SortOrder, SortState};

/// Three-way comparison of two raw cell values under the sort-key rules
/// (numbers before text, numeric values compared numerically, text
/// case-insensitively).
///
/// Returns -1, 0, or 1, suitable for an `Array.prototype.sort`
/// comparator on the JavaScript side.
#[must_use]
#[wasm_bindgen(js_name = "compareValues")]
pub fn compare_values(a: &str, b: &str) -> i32 {
    match SortKey::parse(a).cmp(&SortKey::parse(b)) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
