//! Newtype wrappers for identifiers taken from page markup.
//!
//! Section ids come from `id` attributes and are cloned on every scroll
//! update, so they are kept as cheap shared strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The `id` attribute of a page section.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Creates a new SectionId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this section ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
