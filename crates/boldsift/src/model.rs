//! # Domain Model: Filter Modes and Page Entries
//!
//! This module defines the two core data types: [`FilterMode`], the three-way
//! filtering selection, and [`Entry`], one displayable row of the observed
//! region.
//!
//! ## Entries Are Class Sets
//!
//! The host page communicates everything through markers on the entry itself,
//! the same way a DOM node carries CSS classes:
//!
//! - The **emphasis marker** (e.g. `is-bolded`) is owned by the page and is
//!   the attribute entries are filtered on. Its absence is a valid "not
//!   emphasized", never an error.
//! - The **hidden class** is the visibility flag. It is never persisted and
//!   is recomputed wholesale on every filter pass.
//! - The **placeholder class** marks the single synthetic empty-state row.
//! - The **force-visible class** overrides the hidden class; only the
//!   placeholder ever carries it.
//!
//! An entry is effectively visible when it is forced visible or not hidden.
//! The class names themselves live in [`SiftConfig`](crate::config::SiftConfig)
//! so hosts can avoid collisions with page-owned styling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::SiftError;

/// The three-way filtering selection.
///
/// Exactly one mode is active at any time. The mode is initialized from
/// persisted storage (default [`FilterMode::Off`]) and mutated only by an
/// explicit user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// No filtering; every real entry is visible.
    Off,
    /// Show only entries carrying the emphasis marker.
    MatchingOnly,
    /// Show only entries without the emphasis marker.
    NonMatchingOnly,
}

impl Default for FilterMode {
    fn default() -> Self {
        Self::Off
    }
}

impl FilterMode {
    /// Stable string form used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Off => "off",
            FilterMode::MatchingOnly => "matching-only",
            FilterMode::NonMatchingOnly => "non-matching-only",
        }
    }

    /// All modes in the order the control widget presents them.
    pub fn all() -> [FilterMode; 3] {
        [
            FilterMode::Off,
            FilterMode::MatchingOnly,
            FilterMode::NonMatchingOnly,
        ]
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(FilterMode::Off),
            "matching-only" => Ok(FilterMode::MatchingOnly),
            "non-matching-only" => Ok(FilterMode::NonMatchingOnly),
            other => Err(SiftError::UnknownMode(other.to_string())),
        }
    }
}

/// One displayable row of the observed region.
///
/// An entry is an opaque handle: identity, display text, and the class set
/// described in the module docs. All filtering decisions are driven by the
/// classes alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: Uuid,
    text: String,
    classes: BTreeSet<String>,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            classes: BTreeSet::new(),
        }
    }

    /// Builder: add a class at construction time.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Add or remove a class depending on `on`.
    pub fn apply_class(&mut self, on: bool, class: &str) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_string_form() {
        for mode in FilterMode::all() {
            assert_eq!(mode.as_str().parse::<FilterMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_string_is_an_error() {
        let err = "bold-only".parse::<FilterMode>();
        assert!(err.is_err());
    }

    #[test]
    fn default_mode_is_off() {
        assert_eq!(FilterMode::default(), FilterMode::Off);
    }

    #[test]
    fn apply_class_toggles() {
        let mut entry = Entry::new("A");
        entry.apply_class(true, "hidden");
        assert!(entry.has_class("hidden"));

        entry.apply_class(false, "hidden");
        assert!(!entry.has_class("hidden"));
    }

    #[test]
    fn apply_class_is_idempotent() {
        let mut entry = Entry::new("A");
        entry.apply_class(true, "hidden");
        entry.apply_class(true, "hidden");
        assert!(entry.has_class("hidden"));

        entry.apply_class(false, "hidden");
        entry.apply_class(false, "hidden");
        assert!(!entry.has_class("hidden"));
    }

    #[test]
    fn with_class_builder_stacks() {
        let entry = Entry::new("A").with_class("is-bolded").with_class("row");
        assert!(entry.has_class("is-bolded"));
        assert!(entry.has_class("row"));
        assert!(!entry.has_class("hidden"));
    }

    #[test]
    fn entries_get_distinct_ids() {
        assert_ne!(Entry::new("A").id(), Entry::new("A").id());
    }
}
