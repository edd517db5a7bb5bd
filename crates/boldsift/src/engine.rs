//! # Filter Engine
//!
//! Owns the active [`FilterMode`] and computes visibility for the current
//! entry set. The engine is the system's only state machine: its states are
//! the three modes, its transitions are user selections and the one
//! persisted-value load at startup, and every transition performs a full
//! [`recompute`](FilterEngine::recompute). There is no terminal state; the
//! engine lives for the page session.
//!
//! ## Recompute Semantics
//!
//! Each pass first clears every visibility flag (full unfilter), then applies
//! the current mode's decision to every real entry. The entry set can be
//! replaced wholesale by the host between passes, so no diffing against a
//! previous pass is ever attempted; a pass is unconditional and idempotent,
//! and stale hides cannot survive a mode or membership change.
//!
//! The placeholder never goes through the ordinary matching rule. It keeps
//! its hidden class permanently and is forced visible, via a separate class,
//! exactly when the filtered view would otherwise be empty: `mode != Off` and
//! every real entry hidden (vacuously true for an empty entry set).

use std::rc::Rc;
use tracing::debug;

use crate::classify::Classifier;
use crate::config::SiftConfig;
use crate::model::{Entry, FilterMode};
use crate::page::PageRegion;

pub struct FilterEngine {
    mode: FilterMode,
    classifier: Classifier,
    config: Rc<SiftConfig>,
}

impl FilterEngine {
    pub fn new(config: Rc<SiftConfig>) -> Self {
        Self {
            mode: FilterMode::Off,
            classifier: Classifier::new(Rc::clone(&config)),
            config,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Set the active mode and immediately recompute visibility.
    pub fn set_mode(&mut self, mode: FilterMode, region: &PageRegion) {
        self.mode = mode;
        self.recompute(region);
    }

    /// Whether the current mode hides an entry with the given marker state.
    fn hides(&self, marked: bool) -> bool {
        match self.mode {
            FilterMode::Off => false,
            FilterMode::MatchingOnly => !marked,
            FilterMode::NonMatchingOnly => marked,
        }
    }

    /// Recompute visibility for every entry in the region.
    ///
    /// Unconditional and idempotent: the pass unfilters everything first, so
    /// two consecutive passes over an unchanged entry set produce identical
    /// flags.
    pub fn recompute(&self, region: &PageRegion) {
        let hidden = &self.config.hidden_class;
        let force_visible = &self.config.force_visible_class;

        let (real, hidden_count) = region.with_entries_mut(|entries| {
            // Full unfilter before reapplying. The placeholder keeps its
            // hidden class; it is governed by the emptiness check alone.
            for entry in entries.iter_mut() {
                if !self.classifier.is_placeholder(entry) {
                    entry.remove_class(hidden);
                }
            }

            let mut real = 0usize;
            let mut hidden_count = 0usize;
            for entry in entries.iter_mut() {
                if self.classifier.is_placeholder(entry) {
                    continue;
                }
                real += 1;
                let hide = self.hides(self.classifier.is_marked(entry));
                if hide {
                    hidden_count += 1;
                }
                entry.apply_class(hide, hidden);
            }

            let show_placeholder = self.mode != FilterMode::Off && hidden_count == real;
            for entry in entries.iter_mut() {
                if self.classifier.is_placeholder(entry) {
                    entry.apply_class(show_placeholder, force_visible);
                }
            }

            (real, hidden_count)
        });

        debug!(
            mode = %self.mode,
            entries = real,
            hidden = hidden_count,
            "filter pass applied"
        );
    }

    /// Create the single empty-state placeholder if the region lacks one.
    ///
    /// The placeholder is born hidden; only the emptiness check ever forces
    /// it visible. Returns whether an entry was inserted; a second call while
    /// one exists is a no-op.
    pub fn ensure_placeholder(&self, region: &PageRegion) -> bool {
        let exists = region
            .entries()
            .iter()
            .any(|e| self.classifier.is_placeholder(e));
        if exists {
            return false;
        }

        let entry = Entry::new(self.config.placeholder_text.clone())
            .with_class(self.config.placeholder_class.clone())
            .with_class(self.config.hidden_class.clone());
        region.insert_quiet(entry);
        true
    }
}
