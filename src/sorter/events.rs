//! Click and change handlers for `TableSorter`.
//!
//! All methods here are `pub(crate)` helpers working on the shared
//! state, called from the wasm-exported public API in `mod.rs` and from
//! the event closures registered at attach time.

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{dom, SharedState, TableSorter};
#[cfg(target_arch = "wasm32")]
use crate::error::TablesortError;
#[cfg(target_arch = "wasm32")]
use crate::key::SortKey;
#[cfg(target_arch = "wasm32")]
use crate::markup;
#[cfg(target_arch = "wasm32")]
use crate::sorting::{sort_permutation, Reorder};
#[cfg(target_arch = "wasm32")]
use crate::visibility;

#[cfg(target_arch = "wasm32")]
impl TableSorter {
    /// Handle a header click (or a direct `orderBy` call).
    ///
    /// Failures are reported to the console; a click handler has no
    /// caller to return an error to.
    pub(crate) fn internal_order_by(state: &Rc<RefCell<SharedState>>, column: usize) {
        let callback = match Self::order_by_state(state, column) {
            Ok(callback) => callback,
            Err(e) => {
                web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                return;
            }
        };
        Self::invoke_reorder_callback(callback);
    }

    fn order_by_state(
        state: &Rc<RefCell<SharedState>>,
        column: usize,
    ) -> Result<Option<Function>, TablesortError> {
        let mut s = state.borrow_mut();
        if s.rows.is_none() {
            s.rows = Some(dom::collect_rows(&s.body));
        }

        let action = s.sort.click(column);
        let order = s.sort.order;

        let SharedState {
            table, body, rows, ..
        } = &mut *s;
        let Some(rows) = rows.as_mut() else {
            return Ok(None);
        };

        if let Reorder::Resort(col) = action {
            table
                .set_attribute(markup::ORDER_BY_ATTR, &col.to_string())
                .map_err(dom::js_err)?;
            let keys: Vec<SortKey> = rows.iter().map(|row| dom::row_sort_key(row, col)).collect();
            let permutation = sort_permutation(&keys);
            let next: Vec<_> = permutation.iter().map(|&p| rows[p].clone()).collect();
            *rows = next;
        }

        table
            .set_attribute(markup::ORDER_ATTR, order.as_attr())
            .map_err(dom::js_err)?;
        dom::reorder_rows(table, body, rows, order)?;

        Ok(s.reorder_callback.clone())
    }

    /// Re-read the checkbox and set the table's filter class.
    pub(crate) fn internal_update_visibility(state: &Rc<RefCell<SharedState>>) {
        let s = state.borrow();
        let Some(checkbox) = &s.checkbox else {
            return;
        };

        let class_list = s.table.class_list();
        let result = match visibility::filter_class(checkbox.checked()) {
            Some(class) => class_list.add_1(class),
            None => class_list.remove_1(markup::FILTER_CLASS),
        };
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
    }

    pub(crate) fn invoke_reorder_callback(callback: Option<Function>) {
        if let Some(callback) = callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}
