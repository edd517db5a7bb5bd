//! # Filter Session
//!
//! The once-per-page assembly of the whole system, and the entry point hosts
//! use. [`FilterSession::start`] wires the collaborators together in the
//! page-load order:
//!
//! 1. inject the stylesheet (exactly once per page),
//! 2. await the persisted mode (the control must not render a selection
//!    before this resolves, to avoid flashing an incorrect default,
//! 3. build and mount the control, pre-selected with the loaded mode,
//! 4. register the region watcher,
//! 5. ensure the placeholder and run the initial filter pass (a
//!    persisted-value load is a state-machine transition, and every
//!    transition recomputes).
//!
//! Every absence degrades silently: no anchor means no widget, no region
//! means no watcher and no filtering, a failed or empty preference read
//! means the default mode. Nothing here raises an error to the user.
//!
//! [`FilterSession::select`] is the user-selection transition: apply the
//! mode through the engine immediately, then persist best-effort. The
//! visual update neither waits on nor depends on the write.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::config::SiftConfig;
use crate::engine::FilterEngine;
use crate::model::FilterMode;
use crate::page::{Page, PageRegion};
use crate::store::PreferenceStore;
use crate::styles;
use crate::watch::{self, RegionWatcher};
use crate::widget::FilterControl;

/// A live filter session over one page.
///
/// Constructed once per page load; the engine is an explicit object shared
/// by reference with the watcher and the selection path, with no ambient
/// singletons.
pub struct FilterSession<S: PreferenceStore> {
    engine: Rc<RefCell<FilterEngine>>,
    control: Rc<FilterControl>,
    watcher: RegionWatcher,
    region: Option<Rc<PageRegion>>,
    store: S,
    config: Rc<SiftConfig>,
}

impl<S: PreferenceStore> FilterSession<S> {
    /// Assemble and start a session on `page`.
    pub async fn start(page: &Page, store: S, config: SiftConfig) -> Self {
        let config = Rc::new(config);

        page.ensure_stylesheet(&styles::rules(&config));

        let mode = match store.get(&config.storage_key).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(stored = %raw, "unrecognized stored filter mode; using default");
                FilterMode::Off
            }),
            Ok(None) => FilterMode::Off,
            Err(e) => {
                warn!(error = %e, "preference read failed; using default mode");
                FilterMode::Off
            }
        };

        let engine = Rc::new(RefCell::new(FilterEngine::new(Rc::clone(&config))));
        let control = Rc::new(FilterControl::build(&config, mode));
        control.mount(page);

        let watcher = RegionWatcher::new();
        let region = page.region().cloned();
        if let Some(region) = &region {
            watcher.observe(
                Some(region),
                watch::change_handler(Rc::clone(&engine), Rc::clone(&control)),
            );
            engine.borrow().ensure_placeholder(region);
            engine.borrow_mut().set_mode(mode, region);
        }

        debug!(
            mode = %mode,
            mounted = control.is_mounted(),
            observing = watcher.is_active(),
            "filter session started"
        );

        Self {
            engine,
            control,
            watcher,
            region,
            store,
            config,
        }
    }

    /// Handle a user selection: apply the mode immediately, then persist.
    ///
    /// Persistence is best-effort; a failed write is logged and swallowed,
    /// and the already-applied visibility change stands.
    pub async fn select(&self, mode: FilterMode) {
        self.control.set_selected(mode);
        if let Some(region) = &self.region {
            self.engine.borrow_mut().set_mode(mode, region);
        }

        if let Err(e) = self.store.set(&self.config.storage_key, mode.as_str()).await {
            warn!(error = %e, "failed to persist filter mode");
        }
    }

    /// The engine's active mode.
    pub fn mode(&self) -> FilterMode {
        self.engine.borrow().mode()
    }

    pub fn control(&self) -> &FilterControl {
        &self.control
    }

    pub fn is_observing(&self) -> bool {
        self.watcher.is_active()
    }

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
