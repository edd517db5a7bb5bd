//! Stylesheet rules for the widget container and the visibility classes.
//!
//! The rule block is plain presentation plumbing: it styles the selector
//! widget and gives the crate-owned classes their `display` semantics. Hosts
//! inject it once per page via [`Page::ensure_stylesheet`](crate::page::Page::ensure_stylesheet).

use once_cell::sync::Lazy;

use crate::config::SiftConfig;

/// Rule block for the default configuration, built once.
pub static DEFAULT_RULES: Lazy<String> = Lazy::new(|| rules(&SiftConfig::default()));

/// Build the rule block for a configuration.
pub fn rules(config: &SiftConfig) -> String {
    format!(
        r#".{widget} {{
    background: var(--surface-primary);
    border-radius: 10px;
    color: var(--text-primary);
    padding: 1.5em;
    width: 100%;
    margin-top: 1em;
    margin-bottom: 1em;
}}

.{widget} label {{
    margin-left: 0.5em;
}}

.{hidden} {{
    display: none;
}}

.{show} {{
    display: block !important;
}}
"#,
        widget = config.widget_class,
        hidden = config.hidden_class,
        show = config.force_visible_class,
    )
}
