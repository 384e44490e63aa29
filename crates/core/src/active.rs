//! Active section resolution for nav-link highlighting.
//!
//! The active section is recomputed from scratch for every scroll position.
//! Sections are scanned in document order and the last one whose top, minus
//! the lookahead, has been scrolled past wins. Near the top of the page the
//! first section is forced active so something is always highlighted.

use crate::config::ActiveLinkConfig;
use folio_types::{SectionBounds, SectionId};

/// Resolves the active section for `scroll_y`.
///
/// Returns `None` only when no section qualifies and the page is scrolled
/// past the top threshold, or when `sections` is empty.
pub fn resolve_active<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    config: &ActiveLinkConfig,
) -> Option<&'a SectionId> {
    if scroll_y < config.top_threshold
        && let Some(first) = sections.first()
    {
        return Some(&first.id);
    }

    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - config.lookahead)
        .map(|section| &section.id)
}

/// Whether a nav link with `href` should carry the highlight class.
///
/// The link fragment is the href minus its first character. With no
/// current section the current id is the empty string, so a bare `#` link
/// is highlighted while nothing else is.
pub fn link_is_active(href: Option<&str>, current: Option<&SectionId>) -> bool {
    let Some(href) = href else {
        return false;
    };
    link_fragment(href) == current.map_or("", SectionId::as_str)
}

fn link_fragment(href: &str) -> &str {
    let mut chars = href.chars();
    chars.next();
    chars.as_str()
}

/// Holds the last resolved section so callers can tell when it changed.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    config: ActiveLinkConfig,
    current: Option<SectionId>,
}

impl ActiveSectionTracker {
    pub fn new(config: ActiveLinkConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&SectionId> {
        self.current.as_ref()
    }

    pub fn active_class(&self) -> &str {
        &self.config.active_class
    }

    /// Recomputes the active section. Returns `true` if it changed.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64) -> bool {
        let next = resolve_active(sections, scroll_y, &self.config).cloned();
        if next == self.current {
            log::trace!("Active section unchanged at scroll {}", scroll_y);
            return false;
        }
        log::debug!(
            "Active section {:?} -> {:?} at scroll {}",
            self.current.as_ref().map(SectionId::as_str),
            next.as_ref().map(SectionId::as_str),
            scroll_y
        );
        self.current = next;
        true
    }
}
