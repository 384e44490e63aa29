//! Interactive behaviour for a static portfolio page.
//!
//! This crate re-exports the platform-agnostic pieces:
//!
//! - [`folio_types`] - section ids and geometry read from the page
//! - [`folio_core`] - configuration, errors and the behaviour logic
//!
//! The browser wiring lives in the `folio-wasm` crate, which is built
//! separately for `wasm32-unknown-unknown`.
//!
//! # Example
//!
//! ```
//! use folio::{ActiveLinkConfig, SectionBounds, resolve_active};
//!
//! let sections = vec![
//!     SectionBounds::new("about", 0.0),
//!     SectionBounds::new("experience", 500.0),
//!     SectionBounds::new("projects", 1200.0),
//! ];
//! let active = resolve_active(&sections, 550.0, &ActiveLinkConfig::default());
//! assert_eq!(active.map(|id| id.as_str()), Some("experience"));
//! ```

pub use folio_core;
pub use folio_types;

pub use folio_core::*;
pub use folio_types::{ElementBox, SectionBounds, SectionId};
