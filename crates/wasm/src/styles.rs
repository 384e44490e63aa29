//! `<style>` blocks injected into the document head.

use crate::dom;
use crate::error::PageError;
use folio_core::FolioConfig;
use folio_core::styles::{
    ACTIVE_LINK_STYLE_ID, TOAST_KEYFRAMES_CSS, TOAST_STYLE_ID, active_link_css,
};
use web_sys::{Document, Element};

/// Style blocks added by this page; removed again on drop.
///
/// Blocks that already existed (from an earlier mount) are left alone and
/// not owned.
pub(crate) struct InjectedStyles {
    owned: Vec<Element>,
}

impl InjectedStyles {
    /// A block that cannot be added is logged and skipped.
    pub(crate) fn inject(document: &Document, config: &FolioConfig) -> Self {
        let mut blocks = Vec::new();
        if config.features.active_link {
            blocks.push((
                ACTIVE_LINK_STYLE_ID,
                active_link_css(
                    &config.selectors.nav_links,
                    &config.active_link.active_class,
                ),
            ));
        }
        if config.features.email_copy {
            blocks.push((TOAST_STYLE_ID, TOAST_KEYFRAMES_CSS.to_string()));
        }

        let mut owned = Vec::new();
        for (id, css) in blocks {
            match inject_style(document, id, &css) {
                Ok(Some(style)) => owned.push(style),
                Ok(None) => {}
                Err(e) => log::warn!("Style block '{}' not injected: {}", id, e),
            }
        }
        Self { owned }
    }
}

fn inject_style(document: &Document, id: &str, css: &str) -> Result<Option<Element>, PageError> {
    if document.get_element_by_id(id).is_some() {
        log::debug!("Style block '{}' already present", id);
        return Ok(None);
    }
    let head = document
        .head()
        .ok_or_else(|| dom::missing("document head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| PageError::from_js("Failed to create style element", &e))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| PageError::from_js("Failed to append style element", &e))?;
    Ok(Some(style))
}

impl Drop for InjectedStyles {
    fn drop(&mut self) {
        for style in self.owned.drain(..) {
            style.remove();
        }
    }
}
