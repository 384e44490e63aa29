//! Smooth scrolling for same-page anchors.

use crate::dom;
use folio_core::{FolioConfig, anchor_target, scroll_destination};
use folio_types::ElementBox;
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub(crate) struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub(crate) fn attach(window: &Window, document: &Document, config: Rc<FolioConfig>) -> Self {
        let anchors: Vec<Element> = dom::query_all(document, &config.selectors.anchors);
        log::debug!("Smooth scroll: {} anchors", anchors.len());

        let listeners = anchors
            .iter()
            .map(|anchor| {
                let anchor_ref = anchor.clone();
                let window = window.clone();
                let document = document.clone();
                let config = config.clone();
                EventListener::new_with_options(
                    anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let href = anchor_ref.get_attribute("href").unwrap_or_default();
                        scroll_to_anchor(&window, &document, &href, &config);
                    },
                )
            })
            .collect();

        Self {
            _listeners: listeners,
        }
    }
}

fn scroll_to_anchor(window: &Window, document: &Document, href: &str, config: &FolioConfig) {
    let Some(selector) = anchor_target(href) else {
        return;
    };
    let Some(target) = dom::query_one::<Element>(document, selector) else {
        log::debug!("No element for anchor '{}'", href);
        return;
    };

    let nav_height = dom::query_one::<HtmlElement>(document, &config.selectors.nav_bar)
        .map(|nav| f64::from(nav.offset_height()));
    let rect = target.get_bounding_client_rect();
    let top = scroll_destination(
        ElementBox::new(rect.top(), rect.height()),
        dom::scroll_y(window),
        nav_height,
        &config.scroll,
    );
    log::debug!("Scrolling to '{}' at {}", href, top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
