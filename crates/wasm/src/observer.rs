//! Owned `IntersectionObserver` wrapper.

use crate::error::PageError;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes elements and reports the ones that start intersecting.
///
/// The observer is disconnected when this value is dropped.
pub(crate) struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// `on_visible` receives each newly intersecting element together with
    /// the observer, so one-shot watchers can unobserve themselves.
    pub(crate) fn new<F>(
        threshold: f64,
        root_margin: Option<&str>,
        mut on_visible: F,
    ) -> Result<Self, PageError>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback: ObserverCallback = Closure::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_visible(entry.target(), &observer);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| PageError::from_js("Failed to create IntersectionObserver", &e))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
