//! Platform-agnostic behaviour for the portfolio page.
//!
//! Everything here is plain Rust with no DOM dependency: the scroll math,
//! section resolution, counter frames, email-copy scheduling and toast
//! bookkeeping. The `folio-wasm` crate reads geometry from the document,
//! feeds it through these types and writes the results back.

pub mod active;
pub mod anchor;
pub mod config;
pub mod counter;
pub mod email;
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod styles;
pub mod toast;

pub use active::{ActiveSectionTracker, link_is_active, resolve_active};
pub use anchor::{anchor_target, scroll_destination};
pub use config::{
    ActiveLinkConfig, EmailConfig, FeatureToggles, FolioConfig, NavigationPolicy, ParallaxConfig,
    RevealConfig, ScrollConfig, SelectorConfig, StatsConfig, ToastConfig,
};
pub use counter::{CounterAnimation, CounterFrame, parse_stat_target};
pub use email::{ClipboardOutcome, EmailAction, EmailCopyPlan, Scheduled, mailto_address};
pub use error::{ConfigError, FolioError};
pub use parallax::Parallax;
pub use reveal::{RevealTracker, StyleDecls};
pub use toast::{ToastId, ToastPhase, ToastSlot, ToastTicket};
