//! Fade-in reveal of content blocks.

use crate::dom;
use crate::error::PageError;
use crate::observer::VisibilityObserver;
use folio_core::reveal::{hidden_styles, root_margin, shown_styles};
use folio_core::{FolioConfig, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver};

pub(crate) struct Reveal {
    _observer: VisibilityObserver,
    tracker: Rc<RefCell<RevealTracker>>,
}

impl Reveal {
    /// Hides every reveal target and starts observing them.
    ///
    /// Returns `None` when the page has no targets.
    pub(crate) fn attach(
        document: &Document,
        config: &FolioConfig,
    ) -> Result<Option<Self>, PageError> {
        let targets: Vec<HtmlElement> =
            dom::query_all(document, &config.selectors.reveal_targets);
        if targets.is_empty() {
            log::debug!("Reveal: no targets, feature disabled");
            return Ok(None);
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        for _ in &targets {
            tracker.borrow_mut().register();
        }

        let shown = shown_styles();
        let on_visible = {
            let tracker = tracker.clone();
            let targets = targets.clone();
            move |element: Element, _: &IntersectionObserver| {
                let Some(index) = targets.iter().position(|target| {
                    let target: &Element = target;
                    *target == element
                }) else {
                    return;
                };
                if tracker.borrow_mut().mark_visible(index) {
                    dom::set_styles(&targets[index], &shown);
                }
            }
        };

        // Targets are only hidden once something can reveal them again.
        let observer = VisibilityObserver::new(
            config.reveal.threshold,
            Some(&root_margin(&config.reveal)),
            on_visible,
        )?;

        let hidden = hidden_styles(&config.reveal);
        for target in &targets {
            dom::set_styles(target, &hidden);
            observer.observe(target);
        }
        log::debug!("Reveal: observing {} targets", targets.len());

        Ok(Some(Self {
            _observer: observer,
            tracker,
        }))
    }

    pub(crate) fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }
}
