//! DOM helpers for `TableSorter`: element lookup, header wrapping, key
//! extraction, and the batch body reorder.
//!
//! Everything here is `pub(crate)` and called from the wiring in
//! `mod.rs` and the handlers in `events.rs`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlTableElement,
    HtmlTableRowElement, HtmlTableSectionElement,
};

#[cfg(target_arch = "wasm32")]
use crate::error::TablesortError;
#[cfg(target_arch = "wasm32")]
use crate::key::SortKey;
#[cfg(target_arch = "wasm32")]
use crate::markup;
#[cfg(target_arch = "wasm32")]
use crate::sorting::SortOrder;

/// Convert a rejected DOM call into a crate error.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_err(e: JsValue) -> TablesortError {
    TablesortError::Dom(format!("{e:?}"))
}

/// Look up an element by id and downcast it to the expected type.
#[cfg(target_arch = "wasm32")]
pub(crate) fn required_element<T: JsCast>(
    document: &Document,
    id: &str,
) -> Result<T, TablesortError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| TablesortError::ElementNotFound(id.to_string()))?;
    element
        .dyn_into::<T>()
        .map_err(|_| TablesortError::BadMarkup(format!("#{id} is not the expected element kind")))
}

/// Find the checkbox input inside the visibility toggle container.
#[cfg(target_arch = "wasm32")]
pub(crate) fn find_checkbox(container: &HtmlElement) -> Result<HtmlInputElement, TablesortError> {
    container
        .get_elements_by_tag_name("input")
        .item(0)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| {
            TablesortError::BadMarkup("visibility control has no checkbox input".to_string())
        })
}

/// The cells of the table's single header row.
#[cfg(target_arch = "wasm32")]
pub(crate) fn header_cells(table: &HtmlTableElement) -> Result<Vec<Element>, TablesortError> {
    let head = table
        .t_head()
        .ok_or_else(|| TablesortError::BadMarkup("table has no header section".to_string()))?;
    let row = head
        .rows()
        .item(0)
        .ok_or_else(|| TablesortError::BadMarkup("header section has no rows".to_string()))?
        .dyn_into::<HtmlTableRowElement>()
        .map_err(|_| TablesortError::BadMarkup("header row is not a table row".to_string()))?;

    let cells = row.cells();
    Ok((0..cells.length()).filter_map(|i| cells.item(i)).collect())
}

/// Wrap the cell's label in an anchor so it reads as clickable.
///
/// The anchor's navigation is cancelled by the click handler.
#[cfg(target_arch = "wasm32")]
pub(crate) fn wrap_header_cell(document: &Document, cell: &Element) -> Result<(), TablesortError> {
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| TablesortError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href("");

    if let Some(label) = cell.first_child() {
        anchor.append_child(&label).map_err(js_err)?;
    }
    cell.append_child(&anchor).map_err(js_err)?;
    Ok(())
}

/// Snapshot the body's current rows.
#[cfg(target_arch = "wasm32")]
pub(crate) fn collect_rows(body: &HtmlTableSectionElement) -> Vec<HtmlTableRowElement> {
    let rows = body.rows();
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|e| e.dyn_into::<HtmlTableRowElement>().ok())
        .collect()
}

/// The sort key of one row in the given column: the cell's
/// `sortable-data` attribute when present, its text content otherwise.
/// A row too short for the column sorts as empty text.
#[cfg(target_arch = "wasm32")]
pub(crate) fn row_sort_key(row: &HtmlTableRowElement, column: usize) -> SortKey {
    let cells = row.cells();
    match u32::try_from(column).ok().and_then(|i| cells.item(i)) {
        Some(cell) => {
            let attr = cell.get_attribute(markup::SORT_KEY_ATTR);
            let text = cell.text_content().unwrap_or_default();
            SortKey::for_cell(attr.as_deref(), &text)
        }
        None => SortKey::Text(String::new()),
    }
}

/// Re-apply the cached row order to the body in one batch.
///
/// The body is detached from the table first so the per-row appends
/// never produce a partially ordered table, then re-attached. Must
/// always finish re-attached.
#[cfg(target_arch = "wasm32")]
pub(crate) fn reorder_rows(
    table: &HtmlTableElement,
    body: &HtmlTableSectionElement,
    rows: &[HtmlTableRowElement],
    order: SortOrder,
) -> Result<(), TablesortError> {
    table.remove_child(body).map_err(js_err)?;

    let append = |row: &HtmlTableRowElement| body.append_child(row).map(|_| ()).map_err(js_err);
    let result = match order {
        SortOrder::Ascending => rows.iter().try_for_each(append),
        SortOrder::Descending => rows.iter().rev().try_for_each(append),
    };

    // Re-attach even when an append failed.
    let attached = table.append_child(body).map(|_| ()).map_err(js_err);
    result.and(attached)
}
