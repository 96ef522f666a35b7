//! Main `TableSorter` struct - the entry point for the listing enhancer.
//!
//! This module provides the WASM-exported `TableSorter` struct that
//! handles:
//! - Wiring header cells with clickable sort anchors
//! - Keeping the active column / direction state and the row cache
//! - Batch-reordering the table body on each sort
//! - Revealing and applying the hidden-entry visibility toggle
//!
//! Event handlers are registered when the sorter is created - no manual
//! JavaScript wiring beyond constructing it.

mod dom;
mod events;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Event, HtmlElement, HtmlInputElement, HtmlTableElement, HtmlTableRowElement,
    HtmlTableSectionElement, MouseEvent,
};

#[cfg(target_arch = "wasm32")]
use crate::error::TablesortError;
#[cfg(not(target_arch = "wasm32"))]
use crate::key::SortKey;
#[cfg(target_arch = "wasm32")]
use crate::markup;
use crate::snapshot::SortSnapshot;
#[cfg(not(target_arch = "wasm32"))]
use crate::sorting::{sort_permutation, Reorder, SortOrder};
use crate::sorting::SortState;
#[cfg(not(target_arch = "wasm32"))]
use crate::visibility;

/// Shared state that can be accessed by event handlers (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) table: HtmlTableElement,
    pub(crate) body: HtmlTableSectionElement,
    pub(crate) checkbox: Option<HtmlInputElement>,
    /// Row cache: the fixed element set, in ascending order of the active
    /// column once sorted. Built lazily on first use.
    pub(crate) rows: Option<Vec<HtmlTableRowElement>>,
    pub(crate) sort: SortState,
    pub(crate) reorder_callback: Option<Function>,
}

/// The sorter exported to JavaScript.
#[wasm_bindgen]
pub struct TableSorter {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    header_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    toggle_closure: Option<Closure<dyn FnMut(Event)>>,

    // Non-wasm32 fields: an in-memory model of the listing table
    #[cfg(not(target_arch = "wasm32"))]
    rows: Vec<ModelRow>,
    #[cfg(not(target_arch = "wasm32"))]
    cache: Option<Vec<usize>>,
    #[cfg(not(target_arch = "wasm32"))]
    sort: SortState,
    #[cfg(not(target_arch = "wasm32"))]
    show_hidden: bool,
    #[cfg(not(target_arch = "wasm32"))]
    has_toggle: bool,
    #[cfg(not(target_arch = "wasm32"))]
    toggle_revealed: bool,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TableSorter {
    /// Attach sorting and filtering behavior to the given table.
    ///
    /// `table` must contain a header row and `body` as its row container.
    /// `toggle`, if present, is the container of the "show hidden"
    /// checkbox; it is revealed only when the listing has hidden entries.
    ///
    /// Wraps every header label in a clickable anchor, forces the
    /// checkbox unchecked, applies the initial visibility filter, and
    /// sorts column 0 ascending. Attaching twice to the same table is
    /// not guarded against and double-wraps the header labels.
    #[wasm_bindgen(constructor)]
    pub fn new(
        table: HtmlTableElement,
        body: HtmlTableSectionElement,
        toggle: Option<HtmlElement>,
    ) -> Result<TableSorter, JsValue> {
        console_error_panic_hook::set_once();

        let checkbox = match &toggle {
            Some(container) => Some(dom::find_checkbox(container)?),
            None => None,
        };
        if let Some(checkbox) = &checkbox {
            checkbox.set_checked(false);
        }

        let document = table.owner_document().ok_or_else(|| {
            TablesortError::BadMarkup("table is not part of a document".to_string())
        })?;
        let header_cells = dom::header_cells(&table)?;

        let state = Rc::new(RefCell::new(SharedState {
            table: table.clone(),
            body: body.clone(),
            checkbox: checkbox.clone(),
            rows: None,
            sort: SortState::default(),
            reorder_callback: None,
        }));

        // Wrap each header label in an anchor and listen on the cell
        // itself, capture phase, so clicks anywhere in the cell sort.
        let mut header_closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();
        for (column, cell) in header_cells.iter().enumerate() {
            dom::wrap_header_cell(&document, cell)?;

            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                Self::internal_order_by(&state, column);
            }) as Box<dyn FnMut(MouseEvent)>);
            cell.add_event_listener_with_callback_and_bool(
                "click",
                closure.as_ref().unchecked_ref(),
                true,
            )
            .map_err(dom::js_err)?;
            header_closures.push(closure);
        }

        // Checkbox toggles visibility on change.
        let toggle_closure = match &checkbox {
            Some(input) => {
                let state = state.clone();
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    Self::internal_update_visibility(&state);
                }) as Box<dyn FnMut(Event)>);
                input
                    .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                    .map_err(dom::js_err)?;
                Some(closure)
            }
            None => None,
        };

        // Hidden entries are only looked for when a toggle exists;
        // the scan doubles as the first build of the row cache.
        let mut any_hidden = false;
        if checkbox.is_some() {
            let rows = dom::collect_rows(&body);
            any_hidden = rows
                .iter()
                .any(|row| row.class_list().contains(markup::HIDDEN_ROW_CLASS));
            state.borrow_mut().rows = Some(rows);
        }

        table
            .set_attribute(markup::ORDER_ATTR, "")
            .map_err(dom::js_err)?;

        if any_hidden {
            if let Some(container) = &toggle {
                container
                    .style()
                    .set_property("display", "block")
                    .map_err(dom::js_err)?;
                Self::internal_update_visibility(&state);
            }
        }

        Self::internal_order_by(&state, 0);

        Ok(TableSorter {
            state,
            header_closures,
            toggle_closure,
        })
    }

    /// Attach to the well-known listing elements of the current document
    /// (`UI_fileTable`, `UI_fileList`, and optionally `UI_showHidden`).
    #[wasm_bindgen(js_name = "attachToDocument")]
    pub fn attach_to_document() -> Result<TableSorter, JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| TablesortError::Other("no window available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| TablesortError::Other("no document available".to_string()))?;

        let table = dom::required_element::<HtmlTableElement>(&document, markup::TABLE_ID)?;
        let body = dom::required_element::<HtmlTableSectionElement>(&document, markup::BODY_ID)?;
        let toggle = document
            .get_element_by_id(markup::TOGGLE_ID)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());

        Self::new(table, body, toggle)
    }

    /// Sort by the given header column, toggling direction when the
    /// column is already active.
    #[wasm_bindgen(js_name = "orderBy")]
    pub fn order_by(&self, column: u32) {
        Self::internal_order_by(&self.state, column as usize);
    }

    /// Re-read the checkbox and apply the visibility filter class.
    #[wasm_bindgen(js_name = "updateVisibility")]
    pub fn update_visibility(&self) {
        Self::internal_update_visibility(&self.state);
    }

    /// Register a callback invoked after every reorder.
    #[wasm_bindgen(js_name = "setOnReorder")]
    pub fn set_on_reorder(&self, callback: Option<Function>) {
        self.state.borrow_mut().reorder_callback = callback;
    }

    /// Current sort and visibility state as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        let snapshot = SortSnapshot {
            order_by: s.sort.column,
            order: s.sort.order_attr().to_string(),
            row_count: s.rows.as_ref().map_or(0, Vec::len),
            hidden_rows: s.rows.as_ref().map_or(0, |rows| {
                rows.iter()
                    .filter(|row| row.class_list().contains(markup::HIDDEN_ROW_CLASS))
                    .count()
            }),
            show_hidden: s.checkbox.as_ref().map(HtmlInputElement::checked),
        };
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

// ============================================================================
// Non-WASM32 Implementation (for testing/CLI)
// ============================================================================

/// One cell of the model table (non-wasm version for testing).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ModelCell {
    /// Displayed text.
    pub text: String,
    /// Value of the `sortable-data` attribute, if the cell carries one.
    pub sortable_data: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ModelCell {
    /// Cell with display text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sortable_data: None,
        }
    }

    /// Cell whose sort key overrides its display text.
    pub fn keyed(text: impl Into<String>, sortable_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sortable_data: Some(sortable_data.into()),
        }
    }
}

/// One row of the model table (non-wasm version for testing).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ModelRow {
    /// Cells, one per column.
    pub cells: Vec<ModelCell>,
    /// True when the row is classed `hidden-object`.
    pub hidden: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl ModelRow {
    /// Visible row from plain cell texts.
    pub fn new(cells: Vec<ModelCell>) -> Self {
        Self {
            cells,
            hidden: false,
        }
    }

    /// Row classed as a hidden entry.
    pub fn hidden(cells: Vec<ModelCell>) -> Self {
        Self {
            cells,
            hidden: true,
        }
    }

    fn key(&self, column: usize) -> SortKey {
        match self.cells.get(column) {
            Some(cell) => SortKey::for_cell(cell.sortable_data.as_deref(), &cell.text),
            None => SortKey::Text(String::new()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TableSorter {
    /// Attach to an in-memory model table (non-wasm version for testing).
    ///
    /// Follows the same initialization sequence as the browser
    /// constructor: checkbox forced unchecked, hidden entries detected
    /// only when a toggle exists, then column 0 sorted ascending.
    pub fn new_test(rows: Vec<ModelRow>, has_toggle: bool) -> Self {
        let mut sorter = TableSorter {
            rows,
            cache: None,
            sort: SortState::default(),
            show_hidden: false,
            has_toggle,
            toggle_revealed: false,
        };
        if has_toggle {
            sorter.build_cache();
            sorter.toggle_revealed = sorter.rows.iter().any(|row| row.hidden);
        }
        sorter.order_by(0);
        sorter
    }

    /// Sort by the given header column, toggling direction when the
    /// column is already active.
    pub fn order_by(&mut self, column: usize) {
        self.build_cache();
        let action = self.sort.click(column);
        let Some(cache) = self.cache.as_mut() else {
            return;
        };
        if let Reorder::Resort(col) = action {
            let keys: Vec<SortKey> = cache.iter().map(|&i| self.rows[i].key(col)).collect();
            let order = sort_permutation(&keys);
            let next: Vec<usize> = order.iter().map(|&p| cache[p]).collect();
            *cache = next;
        }
    }

    /// Set the checkbox state.
    pub fn set_show_hidden(&mut self, checked: bool) {
        self.show_hidden = checked;
    }

    /// Row indices in display order (top to bottom).
    pub fn row_order(&self) -> Vec<usize> {
        let natural: Vec<usize> = (0..self.rows.len()).collect();
        let cache = self.cache.as_ref().unwrap_or(&natural);
        match self.sort.order {
            SortOrder::Ascending => cache.clone(),
            SortOrder::Descending => cache.iter().rev().copied().collect(),
        }
    }

    /// Row indices in display order, with suppressed rows removed.
    pub fn visible_rows(&self) -> Vec<usize> {
        let show_hidden = !self.filter_applied();
        self.row_order()
            .into_iter()
            .filter(|&i| visibility::row_visible(show_hidden, self.rows[i].hidden))
            .collect()
    }

    /// Display text of the given column, in display order.
    pub fn column_values(&self, column: usize) -> Vec<String> {
        self.row_order()
            .into_iter()
            .map(|i| {
                self.rows[i]
                    .cells
                    .get(column)
                    .map(|cell| cell.text.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// True when the table currently carries the filter class.
    pub fn filter_applied(&self) -> bool {
        self.toggle_revealed && !self.show_hidden
    }

    /// True when the visibility control was revealed at attach time.
    pub fn toggle_revealed(&self) -> bool {
        self.toggle_revealed
    }

    /// Mirror of the table's `order` attribute.
    pub fn order_attr(&self) -> &'static str {
        self.sort.order_attr()
    }

    /// Mirror of the table's `order-by` attribute.
    pub fn order_by_attr(&self) -> Option<usize> {
        self.sort.column
    }

    /// Current sort and visibility state.
    pub fn snapshot(&self) -> SortSnapshot {
        SortSnapshot {
            order_by: self.sort.column,
            order: self.sort.order_attr().to_string(),
            row_count: self.cache.as_ref().map_or(0, Vec::len),
            hidden_rows: self.rows.iter().filter(|row| row.hidden).count(),
            show_hidden: self.has_toggle.then_some(self.show_hidden),
        }
    }

    fn build_cache(&mut self) {
        if self.cache.is_none() {
            self.cache = Some((0..self.rows.len()).collect());
        }
    }
}
