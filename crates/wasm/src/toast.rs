//! DOM presenter for the single-slot toast.

use crate::dom;
use crate::error::PageError;
use folio_core::styles::{toast_exit_animation, toast_inline_css};
use folio_core::{ToastConfig, ToastId, ToastSlot};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub(crate) struct ToastPresenter {
    document: Document,
    config: ToastConfig,
    slot: ToastSlot,
    node: Option<HtmlElement>,
    exit_timer: Option<Timeout>,
    remove_timer: Option<Timeout>,
}

impl ToastPresenter {
    pub(crate) fn new(document: Document, config: ToastConfig) -> Rc<RefCell<Self>> {
        let slot = ToastSlot::new(&config);
        Rc::new(RefCell::new(Self {
            document,
            config,
            slot,
            node: None,
            exit_timer: None,
            remove_timer: None,
        }))
    }

    /// Shows the toast, replacing any toast still on screen.
    pub(crate) fn show(this: &Rc<RefCell<Self>>) -> Result<(), PageError> {
        let mut presenter = this.borrow_mut();
        let ticket = presenter.slot.show();
        if ticket.replaced.is_some() {
            presenter.discard_node();
        }

        let node = match presenter.create_node() {
            Ok(node) => node,
            Err(e) => {
                presenter.slot.clear();
                return Err(e);
            }
        };
        presenter.node = Some(node);

        let weak = Rc::downgrade(this);
        let id = ticket.id;
        presenter.exit_timer = Some(Timeout::new(ticket.exit_after_ms, move || {
            Self::begin_exit(&weak, id, ticket.remove_after_ms);
        }));
        Ok(())
    }

    fn create_node(&self) -> Result<HtmlElement, PageError> {
        let node: HtmlElement = self
            .document
            .create_element("div")
            .map_err(|e| PageError::from_js("Failed to create toast", &e))?
            .dyn_into()
            .map_err(|_| PageError::dom("Toast element is not an HtmlElement"))?;
        dom::set_text(&node, &self.config.message);
        node.set_attribute("style", &toast_inline_css(&self.config))
            .map_err(|e| PageError::from_js("Failed to style toast", &e))?;

        let body = self
            .document
            .body()
            .ok_or_else(|| dom::missing("document body"))?;
        body.append_child(&node)
            .map_err(|e| PageError::from_js("Failed to append toast", &e))?;
        Ok(node)
    }

    fn begin_exit(this: &Weak<RefCell<Self>>, id: ToastId, remove_after_ms: u32) {
        let Some(this) = this.upgrade() else {
            return;
        };
        let mut presenter = this.borrow_mut();
        if !presenter.slot.begin_exit(id) {
            return;
        }
        if let Some(node) = &presenter.node {
            let animation = toast_exit_animation(&presenter.config);
            dom::set_styles(node, &[("animation", animation)]);
        }

        let weak = Rc::downgrade(&this);
        presenter.remove_timer = Some(Timeout::new(remove_after_ms, move || {
            Self::finish(&weak, id);
        }));
    }

    fn finish(this: &Weak<RefCell<Self>>, id: ToastId) {
        let Some(this) = this.upgrade() else {
            return;
        };
        let mut presenter = this.borrow_mut();
        if presenter.slot.finish(id)
            && let Some(node) = presenter.node.take()
        {
            node.remove();
        }
    }

    /// Removes the current node and cancels its timers.
    fn discard_node(&mut self) {
        self.exit_timer = None;
        self.remove_timer = None;
        if let Some(node) = self.node.take() {
            node.remove();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slot.clear();
        self.discard_node();
    }

    pub(crate) fn is_showing(&self) -> bool {
        self.node.is_some()
    }
}
