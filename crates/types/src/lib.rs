pub mod geometry;
pub mod ids;

pub use geometry::{ElementBox, SectionBounds};
pub use ids::SectionId;
