//! # Region Watcher
//!
//! Detects structural changes in the observed region and re-triggers the
//! filter pass, making the filter self-healing against asynchronous content
//! loading (pagination, "load more") without the page having to cooperate.
//!
//! The watcher holds no filtering logic. On each change it runs the fixed
//! sequence from [`change_handler`]: ensure the placeholder exists, read the
//! currently selected mode from the live control widget, and, only if a mode
//! is selected, recompute over the freshly read entry set.
//!
//! Registration tolerates a missing region (a no-op, not a failure: the host
//! page's layout is outside this system's control) and refuses to
//! double-register once active. Observation runs for the page's lifetime and
//! is never torn down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

use crate::engine::FilterEngine;
use crate::page::{ChangeHandler, ObserverId, PageRegion};
use crate::widget::FilterControl;

#[derive(Default)]
pub struct RegionWatcher {
    registration: Cell<Option<ObserverId>>,
}

impl RegionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.registration.get().is_some()
    }

    /// Register `handler` on the region's change notifications.
    ///
    /// Returns whether the watcher is observing after the call. An absent
    /// region leaves the watcher inactive; a second call while active is a
    /// no-op.
    pub fn observe(&self, region: Option<&Rc<PageRegion>>, handler: ChangeHandler) -> bool {
        if self.is_active() {
            debug!("watcher already active; ignoring re-registration");
            return true;
        }
        match region {
            Some(region) => {
                let id = region.subscribe(handler);
                self.registration.set(Some(id));
                debug!("watcher registered on content region");
                true
            }
            None => {
                debug!("content region absent; watcher not registered");
                false
            }
        }
    }
}

/// The canonical change handler: placeholder first, then a recompute driven
/// by the widget's live selection. An unmounted widget yields no selection,
/// so only the placeholder step runs.
pub fn change_handler(
    engine: Rc<RefCell<FilterEngine>>,
    control: Rc<FilterControl>,
) -> ChangeHandler {
    Rc::new(move |region: &PageRegion| {
        engine.borrow().ensure_placeholder(region);
        if let Some(mode) = control.selected() {
            engine.borrow_mut().set_mode(mode, region);
        }
    })
}
