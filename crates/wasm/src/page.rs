//! Page lifecycle: configuration, wiring and teardown.
//!
//! Every listener, observer and timer created for the page is owned by the
//! [`Page`] returned from [`Folio::mount`]. Dropping the page (or calling
//! `unmount`) detaches all of them.

use crate::active_link::ActiveLink;
use crate::dom;
use crate::email::EmailCopy;
use crate::error::PageError;
use crate::parallax::HeroParallax;
use crate::reveal::Reveal;
use crate::smooth_scroll::SmoothScroll;
use crate::stats::StatsCounter;
use crate::styles::InjectedStyles;
use folio_core::FolioConfig;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Builder for the page behaviours.
///
/// # Example
///
/// ```javascript
/// const page = new Folio()
///   .withConfig({ parallax: { maxOffset: 200 }, email: { navigation: "afterClipboard" } })
///   .mount();
///
/// // later
/// page.unmount();
/// ```
#[wasm_bindgen]
pub struct Folio {
    config: FolioConfig,
}

#[wasm_bindgen]
impl Folio {
    /// Create a builder using the stock portfolio configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: FolioConfig::default(),
        }
    }

    /// Replace the configuration with a JavaScript object.
    ///
    /// Missing fields keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(mut self, config: JsValue) -> Result<Folio, JsValue> {
        let config: FolioConfig =
            serde_wasm_bindgen::from_value(config).map_err(PageError::from)?;
        config.validate().map_err(PageError::from)?;
        self.config = config;
        Ok(self)
    }

    /// Replace the configuration with a JSON document.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(mut self, json: &str) -> Result<Folio, JsValue> {
        self.config = FolioConfig::from_json(json).map_err(PageError::from)?;
        Ok(self)
    }

    /// Wire every enabled behaviour to the document.
    ///
    /// While the document is still loading, wiring waits for
    /// `DOMContentLoaded`.
    #[wasm_bindgen]
    pub fn mount(self) -> Result<Page, JsValue> {
        Ok(Page::mount(self.config)?)
    }
}

impl Default for Folio {
    fn default() -> Self {
        Self::new()
    }
}

impl Folio {
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }
}

/// The wired behaviours. Fields drop in declaration order, so listeners go
/// before the styles they rely on.
struct Features {
    smooth_scroll: Option<SmoothScroll>,
    reveal: Option<Reveal>,
    active_link: Option<ActiveLink>,
    parallax: Option<HeroParallax>,
    stats: Option<StatsCounter>,
    email: Option<EmailCopy>,
    _styles: InjectedStyles,
}

impl Features {
    /// Wires each enabled behaviour. A behaviour that fails to attach is
    /// logged and left out; the others are wired regardless.
    fn wire(window: &Window, document: &Document, config: Rc<FolioConfig>) -> Self {
        let toggles = config.features.clone();
        let styles = InjectedStyles::inject(document, &config);

        let smooth_scroll = toggles
            .smooth_scroll
            .then(|| SmoothScroll::attach(window, document, config.clone()));
        let reveal = if toggles.reveal {
            attached("reveal", Reveal::attach(document, &config))
        } else {
            None
        };
        let active_link = if toggles.active_link {
            ActiveLink::attach(window, document, &config)
        } else {
            None
        };
        let parallax = if toggles.parallax {
            HeroParallax::attach(window, document, &config)
        } else {
            None
        };
        let stats = if toggles.stats {
            attached("stats", StatsCounter::attach(document, &config))
        } else {
            None
        };
        let email = if toggles.email_copy {
            EmailCopy::attach(window, document, config.clone())
        } else {
            None
        };

        log::debug!(
            "Page wired: smooth_scroll={} reveal={} active_link={} parallax={} stats={} email={}",
            smooth_scroll.is_some(),
            reveal.is_some(),
            active_link.is_some(),
            parallax.is_some(),
            stats.is_some(),
            email.is_some()
        );

        Self {
            smooth_scroll,
            reveal,
            active_link,
            parallax,
            stats,
            email,
            _styles: styles,
        }
    }
}

fn attached<T>(feature: &str, result: Result<Option<T>, PageError>) -> Option<T> {
    result.unwrap_or_else(|e| {
        log::warn!("Failed to wire {}, feature disabled: {}", feature, e);
        None
    })
}

#[derive(Default)]
struct PageState {
    /// One-shot `DOMContentLoaded` listener when mounting was deferred.
    ready: Option<EventListener>,
    features: Option<Features>,
    unmounted: bool,
}

/// A mounted page. Call `unmount` (or `free`) to detach everything.
#[wasm_bindgen]
pub struct Page {
    state: Rc<RefCell<PageState>>,
}

impl Page {
    fn mount(config: FolioConfig) -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let config = Rc::new(config);
        let state = Rc::new(RefCell::new(PageState::default()));

        if document.ready_state() == "loading" {
            log::debug!("Document still loading, deferring wiring");
            let weak = Rc::downgrade(&state);
            let ready_window = window.clone();
            let ready_document = document.clone();
            let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let mut state = state.borrow_mut();
                if state.unmounted {
                    return;
                }
                state.features = Some(Features::wire(&ready_window, &ready_document, config));
            });
            state.borrow_mut().ready = Some(listener);
        } else {
            let features = Features::wire(&window, &document, config);
            state.borrow_mut().features = Some(features);
        }

        Ok(Self { state })
    }

    fn with_features<T>(&self, f: impl FnOnce(&Features) -> T) -> Option<T> {
        self.state.borrow().features.as_ref().map(f)
    }
}

#[wasm_bindgen]
impl Page {
    /// Detach all listeners, observers and timers and remove injected nodes.
    #[wasm_bindgen]
    pub fn unmount(&self) {
        let mut state = self.state.borrow_mut();
        if state.unmounted {
            return;
        }
        state.unmounted = true;
        state.features = None;
        state.ready = None;
        log::debug!("Page unmounted");
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().features.is_some()
    }

    /// True while wiring waits for `DOMContentLoaded`.
    #[wasm_bindgen(getter, js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        let state = self.state.borrow();
        !state.unmounted && state.features.is_none() && state.ready.is_some()
    }

    #[wasm_bindgen(getter, js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.with_features(|f| f.active_link.as_ref().and_then(ActiveLink::current))
            .flatten()
    }

    #[wasm_bindgen(getter, js_name = revealedCount)]
    pub fn revealed_count(&self) -> usize {
        self.with_features(|f| f.reveal.as_ref().map_or(0, Reveal::revealed_count))
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter, js_name = statsStarted)]
    pub fn stats_started(&self) -> bool {
        self.with_features(|f| f.stats.as_ref().is_some_and(StatsCounter::has_fired))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = runningCounters)]
    pub fn running_counters(&self) -> usize {
        self.with_features(|f| f.stats.as_ref().map_or(0, StatsCounter::running))
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter, js_name = toastVisible)]
    pub fn toast_visible(&self) -> bool {
        self.with_features(|f| f.email.as_ref().is_some_and(EmailCopy::toast_showing))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = hasSmoothScroll)]
    pub fn has_smooth_scroll(&self) -> bool {
        self.with_features(|f| f.smooth_scroll.is_some())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = hasParallax)]
    pub fn has_parallax(&self) -> bool {
        self.with_features(|f| f.parallax.is_some()).unwrap_or(false)
    }
}
