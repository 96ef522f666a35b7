//! Structured error types for tablesort.
//!
//! Initialization is the only fallible phase: once the sorter is attached,
//! click handling never reports errors to the caller.

/// All errors that can occur while attaching the sorter to a page.
#[derive(Debug, thiserror::Error)]
pub enum TablesortError {
    /// A required element is missing from the document.
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// An element exists but is not the expected kind of node.
    #[error("bad markup: {0}")]
    BadMarkup(String),

    /// A DOM operation was rejected by the browser.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TablesortError>;

impl From<String> for TablesortError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TablesortError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TablesortError> for wasm_bindgen::JsValue {
    fn from(e: TablesortError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
