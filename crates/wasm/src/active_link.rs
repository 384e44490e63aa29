//! Nav-link highlighting for the section in view.

use crate::dom;
use folio_core::{ActiveSectionTracker, FolioConfig, link_is_active};
use folio_types::SectionBounds;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement, Window};

struct Inner {
    window: Window,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
    tracker: ActiveSectionTracker,
}

impl Inner {
    /// Section geometry is re-read on every call since layout can shift.
    fn geometry(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .filter_map(|section| {
                let id = section.get_attribute("id")?;
                Some(SectionBounds::new(id, f64::from(section.offset_top())))
            })
            .collect()
    }

    fn refresh(&mut self) {
        let geometry = self.geometry();
        let scroll_y = dom::scroll_y(&self.window);
        self.tracker.update(&geometry, scroll_y);

        let class = self.tracker.active_class();
        let current = self.tracker.current();
        for link in &self.links {
            let classes = link.class_list();
            if let Err(e) = classes.remove_1(class) {
                log::warn!("Failed to clear active class: {:?}", e);
            }
            let href = link.get_attribute("href");
            if link_is_active(href.as_deref(), current)
                && let Err(e) = classes.add_1(class)
            {
                log::warn!("Failed to set active class: {:?}", e);
            }
        }
    }
}

pub(crate) struct ActiveLink {
    _listener: EventListener,
    inner: Rc<RefCell<Inner>>,
}

impl ActiveLink {
    /// Returns `None` when the page has no nav links to highlight.
    pub(crate) fn attach(
        window: &Window,
        document: &Document,
        config: &FolioConfig,
    ) -> Option<Self> {
        let links: Vec<Element> = dom::query_all(document, &config.selectors.nav_links);
        if links.is_empty() {
            log::debug!("Active link: no nav links, feature disabled");
            return None;
        }
        let sections: Vec<HtmlElement> = dom::query_all(document, &config.selectors.sections);
        log::debug!(
            "Active link: {} sections, {} links",
            sections.len(),
            links.len()
        );

        let inner = Rc::new(RefCell::new(Inner {
            window: window.clone(),
            sections,
            links,
            tracker: ActiveSectionTracker::new(config.active_link.clone()),
        }));

        // gloo listeners are passive unless prevent_default is enabled.
        let listener = {
            let inner = inner.clone();
            EventListener::new(window, "scroll", move |_| inner.borrow_mut().refresh())
        };
        inner.borrow_mut().refresh();

        Some(Self {
            _listener: listener,
            inner,
        })
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.inner
            .borrow()
            .tracker
            .current()
            .map(|id| id.as_str().to_string())
    }
}
