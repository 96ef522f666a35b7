//! Hidden-row filtering rules.
//!
//! Visibility is expressed as a single class on the table element:
//! while present, CSS suppresses every row classed `hidden-object`.
//! The checkbox asks "show hidden entries?", so an unchecked box means
//! the filter class is applied.

use crate::markup::FILTER_CLASS;

/// The class the table should carry for a given toggle state, if any.
#[must_use]
pub fn filter_class(show_hidden: bool) -> Option<&'static str> {
    if show_hidden {
        None
    } else {
        Some(FILTER_CLASS)
    }
}

/// Whether a row is visible under the current toggle state.
#[must_use]
pub fn row_visible(show_hidden: bool, row_hidden: bool) -> bool {
    show_hidden || !row_hidden
}
