//! # Filter Control Widget
//!
//! The labeled three-option exclusive selector the user picks a mode with.
//! This type is presentation state only: it knows its title, its options,
//! which one is selected, and whether it made it onto the page. All filtering
//! effects are delegated to the engine by the session; the widget never
//! touches an entry.
//!
//! Mounting degrades silently when the anchor element is missing, matching a
//! host page whose layout varies or loads late. An unmounted control reports
//! no selection, the same way an un-inserted element is invisible to document
//! queries.

use std::cell::Cell;
use tracing::debug;

use crate::config::SiftConfig;
use crate::model::FilterMode;
use crate::page::Page;

/// One selectable option of the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub mode: FilterMode,
    pub label: String,
}

pub struct FilterControl {
    title: String,
    options: Vec<FilterOption>,
    selected: Cell<FilterMode>,
    mounted: Cell<bool>,
}

impl FilterControl {
    /// Build the control with its three options in fixed order, pre-selected
    /// with `initial` (the persisted mode, loaded before any rendering).
    pub fn build(config: &SiftConfig, initial: FilterMode) -> Self {
        let label_for = |mode: FilterMode| match mode {
            FilterMode::Off => config.label_off.clone(),
            FilterMode::MatchingOnly => config.label_matching.clone(),
            FilterMode::NonMatchingOnly => config.label_non_matching.clone(),
        };

        Self {
            title: config.widget_title.clone(),
            options: FilterMode::all()
                .into_iter()
                .map(|mode| FilterOption {
                    mode,
                    label: label_for(mode),
                })
                .collect(),
            selected: Cell::new(initial),
            mounted: Cell::new(false),
        }
    }

    /// Insert the control at the page's anchor point. Returns whether it
    /// mounted; a missing anchor skips the step silently.
    pub fn mount(&self, page: &Page) -> bool {
        if page.has_anchor() {
            self.mounted.set(true);
            true
        } else {
            debug!("widget anchor absent; control not mounted");
            false
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// The live selection, or `None` while the control is not on the page.
    pub fn selected(&self) -> Option<FilterMode> {
        if self.mounted.get() {
            Some(self.selected.get())
        } else {
            None
        }
    }

    /// Record a selection event. Presentation state only; the caller routes
    /// the mode into the engine and the preference store.
    pub fn set_selected(&self, mode: FilterMode) {
        self.selected.set(mode);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }
}
