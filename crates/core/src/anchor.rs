//! Same-page anchor navigation.
//!
//! A click on `#section` scrolls so the section's top sits just below the
//! fixed nav bar instead of underneath it.

use crate::config::ScrollConfig;
use folio_types::ElementBox;

/// Returns the selector an anchor's href resolves to, or `None` when the
/// click should do nothing at all (`""` and a bare `#`).
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        selector => Some(selector),
    }
}

/// Computes the document offset to scroll to for `target`.
///
/// `nav_height` is the measured nav bar height; when the page has no nav bar
/// the configured fallback height is used instead.
pub fn scroll_destination(
    target: ElementBox,
    scroll_y: f64,
    nav_height: Option<f64>,
    config: &ScrollConfig,
) -> f64 {
    let nav_height = nav_height.unwrap_or(config.fallback_nav_height);
    target.document_top(scroll_y) - nav_height - config.extra_offset
}
