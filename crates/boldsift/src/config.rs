//! # Configuration
//!
//! [`SiftConfig`] names every marker, label, and storage key the system
//! touches. It is the Rust analog of the constants block a page script would
//! carry: hosts construct one (usually `SiftConfig::default()`), override the
//! page-owned selectors to match their target page, and pass it to
//! [`FilterSession::start`](crate::session::FilterSession::start).
//!
//! Two groups of settings:
//!
//! - **Page-owned**: `marker_class`, already present on entries when the
//!   page renders them. This system only reads it.
//! - **Crate-owned**: the `hidden`/`placeholder`/`force-visible` classes, the
//!   storage key, and all widget text. These are written by this system and
//!   are namespaced by default to avoid colliding with page styling.
//!
//! Configuration is injected programmatically; there is no file or
//! environment layering, since the embedding host owns deployment.

use serde::{Deserialize, Serialize};

/// Configuration for a filter session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiftConfig {
    /// Page-owned class marking an emphasized entry.
    pub marker_class: String,

    /// Class this system toggles to hide an entry.
    pub hidden_class: String,

    /// Class marking the synthetic empty-state entry.
    pub placeholder_class: String,

    /// Class forcing the placeholder visible despite its hidden class.
    pub force_visible_class: String,

    /// Class on the selector widget's container element.
    pub widget_class: String,

    /// Key under which the selected mode is persisted.
    pub storage_key: String,

    /// Heading shown above the selector widget.
    pub widget_title: String,

    /// Label for the `Off` option.
    pub label_off: String,

    /// Label for the `MatchingOnly` option.
    pub label_matching: String,

    /// Label for the `NonMatchingOnly` option.
    pub label_non_matching: String,

    /// Text of the empty-state entry.
    pub placeholder_text: String,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            marker_class: "is-bolded".to_string(),
            hidden_class: "boldsift-hidden".to_string(),
            placeholder_class: "boldsift-placeholder".to_string(),
            force_visible_class: "boldsift-show".to_string(),
            widget_class: "boldsift-widget".to_string(),
            storage_key: "boldsift.filter-mode".to_string(),
            widget_title: "Bold Filter".to_string(),
            label_off: "Off".to_string(),
            label_matching: "Show Only Bolds".to_string(),
            label_non_matching: "Show Only Non-Bolds".to_string(),
            placeholder_text: "Nothing to see here!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classes_are_namespaced() {
        let config = SiftConfig::default();
        assert!(config.hidden_class.starts_with("boldsift-"));
        assert!(config.placeholder_class.starts_with("boldsift-"));
        assert!(config.force_visible_class.starts_with("boldsift-"));
    }

    #[test]
    fn crate_owned_classes_are_distinct() {
        let config = SiftConfig::default();
        let classes = [
            &config.marker_class,
            &config.hidden_class,
            &config.placeholder_class,
            &config.force_visible_class,
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn overrides_keep_remaining_defaults() {
        let config = SiftConfig {
            marker_class: "chart-entry-bold".to_string(),
            ..Default::default()
        };
        assert_eq!(config.marker_class, "chart-entry-bold");
        assert_eq!(config.hidden_class, "boldsift-hidden");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SiftConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SiftConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
