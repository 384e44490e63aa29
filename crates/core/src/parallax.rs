use crate::config::ParallaxConfig;

/// Vertical hero translation as a fraction of the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    factor: f64,
    max_offset: Option<f64>,
}

impl Parallax {
    pub fn new(config: &ParallaxConfig) -> Self {
        Self {
            factor: config.factor,
            max_offset: config.max_offset,
        }
    }

    pub fn offset(&self, scroll_y: f64) -> f64 {
        let raw = scroll_y * self.factor;
        match self.max_offset {
            Some(max) => raw.clamp(-max, max),
            None => raw,
        }
    }

    /// CSS `transform` value for `scroll_y`.
    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({}px)", self.offset(scroll_y))
    }
}
