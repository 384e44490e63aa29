//! WebAssembly bindings for the folio portfolio page behaviours.
//!
//! This crate wires the platform-agnostic logic of `folio-core` to a live
//! document: it reads geometry and text from the DOM, feeds it through the
//! core types and writes styles, classes and text back.
//!
//! # Behaviours
//!
//! - Smooth scrolling for same-page anchors, offset below the nav bar
//! - Fade-in reveal of sections and cards as they enter the viewport
//! - Highlighting of the nav link for the section in view
//! - Parallax translation of the hero block
//! - Count-up animation of `N+` statistics once the stats block is visible
//! - Copying the mailto address to the clipboard with a toast confirmation
//!
//! ## Module Structure
//!
//! - [`page`] - `Folio` builder and the owned `Page` handle
//! - [`error`] - Error types with JavaScript interop
//! - one module per behaviour, plus DOM, observer and style helpers
//!
//! # Ownership
//!
//! Nothing is registered globally. Every listener, observer and timer lives
//! inside the `Page` returned by `mount()` and is released by `unmount()` or
//! when the page handle is freed.
//!
//! # Example
//!
//! ```javascript
//! import init, { Folio } from './folio_wasm.js';
//!
//! await init();
//!
//! const page = new Folio().mount();
//! ```
//!
//! # Browser Support
//!
//! Requires `IntersectionObserver` and smooth `scrollTo` options. The
//! clipboard is optional: without `navigator.clipboard` no toast is shown
//! and the mail client still opens.

mod active_link;
mod dom;
mod email;
mod error;
mod observer;
pub mod page;
mod parallax;
mod reveal;
mod smooth_scroll;
mod stats;
mod styles;
mod toast;

pub use error::{ErrorCode, PageError};
pub use page::{Folio, Page};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Mount the page with the stock configuration.
#[wasm_bindgen(js_name = mountDefault)]
pub fn mount_default() -> Result<Page, JsValue> {
    Folio::new().mount()
}

/// Get the version of the folio-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
