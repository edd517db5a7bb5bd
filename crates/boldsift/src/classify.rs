//! Entry classification.
//!
//! [`Classifier`] answers the two questions the filter engine asks about an
//! entry: does it carry the emphasis marker, and is it the synthetic
//! placeholder. Both are pure reads of markers already present on the entry.
//! A missing marker is a valid "false", never an error.

use std::rc::Rc;

use crate::config::SiftConfig;
use crate::model::Entry;

/// Pure, O(1) classification of entries against a config's marker classes.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: Rc<SiftConfig>,
}

impl Classifier {
    pub fn new(config: Rc<SiftConfig>) -> Self {
        Self { config }
    }

    /// Whether the entry carries the page-owned emphasis marker.
    pub fn is_marked(&self, entry: &Entry) -> bool {
        entry.has_class(&self.config.marker_class)
    }

    /// Whether the entry is the synthetic empty-state placeholder.
    ///
    /// Placeholder and real entry are mutually exclusive: the placeholder is
    /// never run through the ordinary matching rule.
    pub fn is_placeholder(&self, entry: &Entry) -> bool {
        entry.has_class(&self.config.placeholder_class)
    }
}
