//! Fade-in reveal of content blocks.
//!
//! Targets start transparent and pushed down; the first time one becomes
//! visible it is restored to its natural position and the registered
//! transition animates the change. A revealed element stays revealed.

use crate::config::RevealConfig;

/// Inline style declarations as `(property, value)` pairs.
pub type StyleDecls = Vec<(&'static str, String)>;

/// Styles applied to every target when the page is wired up.
pub fn hidden_styles(config: &RevealConfig) -> StyleDecls {
    vec![
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({}px)", config.offset_px)),
        (
            "transition",
            format!(
                "opacity {secs}s {easing}, transform {secs}s {easing}",
                secs = config.duration_secs,
                easing = config.easing
            ),
        ),
    ]
}

/// Styles applied once a target has become visible.
pub fn shown_styles() -> StyleDecls {
    vec![
        ("opacity", "1".to_string()),
        ("transform", "translateY(0)".to_string()),
    ]
}

/// The observer root margin, shrinking the viewport at the bottom.
pub fn root_margin(config: &RevealConfig) -> String {
    format!("0px 0px -{}px 0px", config.bottom_margin_px)
}

/// Per-target visibility records.
///
/// Records only ever go from hidden to revealed.
#[derive(Debug, Default, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new hidden target and returns its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Records that target `index` became visible.
    ///
    /// Returns `true` only the first time, when the shown styles need to be
    /// applied. Unknown indices are ignored.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|seen| **seen).count()
    }
}
