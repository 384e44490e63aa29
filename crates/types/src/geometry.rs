use crate::ids::SectionId;
use serde::{Deserialize, Serialize};

/// A section's position in document coordinates, as read from `offsetTop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<SectionId>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Vertical extent of an element relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementBox {
    /// `getBoundingClientRect().top`
    pub viewport_top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(viewport_top: f64, height: f64) -> Self {
        Self {
            viewport_top,
            height,
        }
    }

    /// Converts the viewport-relative top to a document-relative one.
    pub fn document_top(&self, scroll_y: f64) -> f64 {
        self.viewport_top + scroll_y
    }
}
