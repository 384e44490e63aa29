//! Copy-email-to-clipboard on the first mailto link.

use crate::dom;
use crate::error::PageError;
use crate::toast::ToastPresenter;
use folio_core::{ClipboardOutcome, EmailAction, EmailCopyPlan, FolioConfig, Scheduled};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, Window};

struct EmailState {
    window: Window,
    config: Rc<FolioConfig>,
    toast: Rc<RefCell<ToastPresenter>>,
    /// Delayed actions of the latest click. A new click replaces them.
    pending: RefCell<Vec<Timeout>>,
    /// Bumped on every click; settlements of older clicks are ignored.
    generation: Cell<u64>,
    active: Cell<bool>,
}

impl EmailState {
    fn on_click(self: &Rc<Self>, href: &str) {
        let plan = EmailCopyPlan::new(href, &self.config.email);
        log::debug!("Email copy: copying '{}'", plan.address());

        self.pending.borrow_mut().clear();
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.run(plan.on_click());

        match write_clipboard(&self.window, plan.address()) {
            Ok(promise) => {
                let state = self.clone();
                spawn_local(async move {
                    let outcome = match JsFuture::from(promise).await {
                        Ok(_) => ClipboardOutcome::Written,
                        Err(e) => {
                            log::debug!("Clipboard write rejected: {:?}", e);
                            ClipboardOutcome::Rejected
                        }
                    };
                    state.settle(generation, &plan, outcome);
                });
            }
            Err(e) => {
                log::debug!("Clipboard unavailable: {}", e);
                self.settle(generation, &plan, ClipboardOutcome::Rejected);
            }
        }
    }

    fn settle(self: &Rc<Self>, generation: u64, plan: &EmailCopyPlan, outcome: ClipboardOutcome) {
        if !self.active.get() || generation != self.generation.get() {
            log::trace!("Ignoring stale clipboard result");
            return;
        }
        self.run(plan.on_clipboard_settled(outcome));
    }

    fn run(self: &Rc<Self>, actions: Vec<Scheduled>) {
        for Scheduled { delay_ms, action } in actions {
            if delay_ms == 0 {
                self.perform(action);
                continue;
            }
            let weak = Rc::downgrade(self);
            let timeout = Timeout::new(delay_ms, move || {
                if let Some(state) = weak.upgrade() {
                    state.perform(action);
                }
            });
            self.pending.borrow_mut().push(timeout);
        }
    }

    fn perform(&self, action: EmailAction) {
        match action {
            EmailAction::ShowToast => {
                if let Err(e) = ToastPresenter::show(&self.toast) {
                    log::warn!("Failed to show toast: {}", e);
                }
            }
            EmailAction::Navigate { href } => {
                log::debug!("Email copy: opening '{}'", href);
                if let Err(e) = self.window.location().set_href(&href) {
                    log::warn!("Failed to navigate to '{}': {:?}", href, e);
                }
            }
        }
    }

    fn shutdown(&self) {
        self.active.set(false);
        self.pending.borrow_mut().clear();
        self.toast.borrow_mut().clear();
    }
}

/// Calls `navigator.clipboard.writeText(text)`.
///
/// Looked up dynamically since the clipboard is missing on insecure origins.
fn write_clipboard(window: &Window, text: &str) -> Result<Promise, PageError> {
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| PageError::from_js("Failed to read navigator.clipboard", &e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(PageError::dom("Clipboard API unavailable"));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| PageError::from_js("Failed to read clipboard.writeText", &e))?
        .dyn_into()
        .map_err(|_| PageError::dom("clipboard.writeText is not a function"))?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| PageError::from_js("clipboard.writeText threw", &e))?
        .dyn_into()
        .map_err(|_| PageError::dom("clipboard.writeText did not return a promise"))
}

pub(crate) struct EmailCopy {
    _listener: EventListener,
    state: Rc<EmailState>,
}

impl EmailCopy {
    /// Returns `None` when the page has no mailto link.
    pub(crate) fn attach(
        window: &Window,
        document: &Document,
        config: Rc<FolioConfig>,
    ) -> Option<Self> {
        let Some(link) = dom::query_one::<Element>(document, &config.selectors.email_link) else {
            log::debug!("Email copy: no mailto link, feature disabled");
            return None;
        };

        let state = Rc::new(EmailState {
            window: window.clone(),
            toast: ToastPresenter::new(document.clone(), config.toast.clone()),
            config,
            pending: RefCell::new(Vec::new()),
            generation: Cell::new(0),
            active: Cell::new(true),
        });

        let listener = {
            let state = state.clone();
            let href_source = link.clone();
            EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let href = href_source.get_attribute("href").unwrap_or_default();
                    state.on_click(&href);
                },
            )
        };

        Some(Self {
            _listener: listener,
            state,
        })
    }

    pub(crate) fn toast_showing(&self) -> bool {
        self.state.toast.borrow().is_showing()
    }
}

impl Drop for EmailCopy {
    fn drop(&mut self) {
        self.state.shutdown();
    }
}
