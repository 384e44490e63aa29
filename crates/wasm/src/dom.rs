//! Thin helpers over `web-sys` document access.
//!
//! Lookups that fail because the markup lacks an element return `None` or
//! an empty list; only missing host objects are errors.

use crate::error::PageError;
use folio_core::FolioError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Error for a host object the page cannot work without.
pub(crate) fn missing(what: &str) -> PageError {
    FolioError::Markup(format!("No {} available", what)).into()
}

pub(crate) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or_else(|| missing("window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or_else(|| missing("document"))
}

/// All elements matching `selector` that are of type `T`.
///
/// An invalid selector yields an empty list.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Invalid selector '{}': {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// The first element matching `selector`, if it is of type `T`.
pub(crate) fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<T>().ok()),
        Err(e) => {
            log::debug!("Selector '{}' could not be resolved: {:?}", selector, e);
            None
        }
    }
}

pub(crate) fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) {
    let style = element.style();
    for (property, value) in styles {
        if let Err(e) = style.set_property(property, value) {
            log::warn!("Failed to set {} on element: {:?}", property, e);
        }
    }
}

/// Current vertical scroll offset, `0` if the window cannot report it.
pub(crate) fn scroll_y(window: &Window) -> f64 {
    window
        .scroll_y()
        .or_else(|_| window.page_y_offset())
        .unwrap_or(0.0)
}

pub(crate) fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_missing_host_object_is_markup_error() {
        let err = missing("document head");
        assert_eq!(err.code(), ErrorCode::Dom);
        assert_eq!(err.message(), "Markup error: No document head available");
    }
}
