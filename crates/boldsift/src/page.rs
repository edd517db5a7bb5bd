//! # Page Model
//!
//! The host page is outside this system's control: its entry list is owned by
//! the page, can be replaced wholesale (pagination, lazy loading), and changes
//! without notice. This module models that boundary with two types:
//!
//! - [`PageRegion`]: the observed content region. It owns the ordered entry
//!   list and a subscriber registry. Structural mutations (`append`, `remove`,
//!   `replace_all`) notify subscribers after the change lands; class toggles
//!   go through [`PageRegion::with_entries_mut`] and do not notify, mirroring
//!   the distinction between child-list mutations and attribute changes.
//! - [`Page`]: the host document double with an optional region, an optional
//!   widget anchor, and a deduplicated stylesheet list.
//!
//! Everything is single-threaded and cooperative, so interior mutability is
//! `RefCell`/`Cell`, not locks. Entry sets are always re-read on demand;
//! nothing here hands out a cached snapshot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use uuid::Uuid;

use crate::model::Entry;

/// Handler invoked after each structural change to a region.
pub type ChangeHandler = Rc<dyn Fn(&PageRegion)>;

/// Token identifying a registered change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

/// The observed content region: an ordered entry list plus change observers.
#[derive(Default)]
pub struct PageRegion {
    entries: RefCell<Vec<Entry>>,
    observers: RefCell<Vec<(ObserverId, ChangeHandler)>>,
    next_observer_id: Cell<u64>,
}

impl PageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            ..Default::default()
        }
    }

    /// Fresh snapshot of the current entries, in document order.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Mutate entries in place without notifying observers.
    ///
    /// This is the path for visibility-flag toggles: class changes are not
    /// structural changes and must not re-trigger the watcher.
    pub fn with_entries_mut<R>(&self, f: impl FnOnce(&mut Vec<Entry>) -> R) -> R {
        f(&mut self.entries.borrow_mut())
    }

    /// Append an entry and notify observers.
    pub fn append(&self, entry: Entry) {
        self.entries.borrow_mut().push(entry);
        self.notify();
    }

    /// Remove an entry by id. Notifies observers only if something changed.
    pub fn remove(&self, id: Uuid) -> bool {
        let removed = {
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|e| e.id() != id);
            entries.len() != before
        };
        if removed {
            self.notify();
        }
        removed
    }

    /// Replace the whole entry list, as a paginating page does, and notify.
    pub fn replace_all(&self, entries: Vec<Entry>) {
        *self.entries.borrow_mut() = entries;
        self.notify();
    }

    /// Insert an entry without notifying observers.
    ///
    /// Used for the placeholder, which is inserted from inside a change pass
    /// and is always followed by a recompute in the same pass.
    pub fn insert_quiet(&self, entry: Entry) {
        self.entries.borrow_mut().push(entry);
    }

    /// Register a change handler. Handlers live for the region's lifetime;
    /// observation is never explicitly torn down.
    pub fn subscribe(&self, handler: ChangeHandler) -> ObserverId {
        let id = ObserverId(self.next_observer_id.get());
        self.next_observer_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, handler));
        id
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn notify(&self) {
        // Clone the handler list out so handlers may themselves read the
        // region (and subscribe) without hitting the observers borrow.
        let handlers: Vec<ChangeHandler> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler(self);
        }
    }
}

/// Host-document double: the insertion points and stylesheet surface a page
/// script would touch. Any of them may be absent; callers degrade silently.
#[derive(Default)]
pub struct Page {
    region: Option<Rc<PageRegion>>,
    anchor: bool,
    stylesheets: RefCell<Vec<String>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: attach the observed content region.
    pub fn with_region(mut self, region: Rc<PageRegion>) -> Self {
        self.region = Some(region);
        self
    }

    /// Builder: mark the widget anchor element as present.
    pub fn with_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn region(&self) -> Option<&Rc<PageRegion>> {
        self.region.as_ref()
    }

    pub fn has_anchor(&self) -> bool {
        self.anchor
    }

    /// Ensure a rule block is present exactly once. Returns whether it was
    /// newly inserted.
    pub fn ensure_stylesheet(&self, rules: &str) -> bool {
        let mut sheets = self.stylesheets.borrow_mut();
        if sheets.iter().any(|s| s == rules) {
            return false;
        }
        sheets.push(rules.to_string());
        true
    }

    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn entries_snapshot_reflects_latest_mutation() {
        let region = PageRegion::new();
        region.append(Entry::new("A"));
        region.append(Entry::new("B"));
        assert_eq!(region.len(), 2);

        region.replace_all(vec![Entry::new("C")]);
        let texts: Vec<_> = region.entries().iter().map(|e| e.text().to_string()).collect();
        assert_eq!(texts, vec!["C"]);
    }

    #[test]
    fn structural_mutations_notify() {
        let region = Rc::new(PageRegion::new());
        let fired = Rc::new(Cell::new(0));

        let fired_in_handler = Rc::clone(&fired);
        region.subscribe(Rc::new(move |_| {
            fired_in_handler.set(fired_in_handler.get() + 1);
        }));

        region.append(Entry::new("A"));
        region.replace_all(vec![Entry::new("B")]);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn remove_notifies_only_on_change() {
        let region = Rc::new(PageRegion::new());
        let entry = Entry::new("A");
        let id = entry.id();
        region.append(entry);

        let fired = Rc::new(Cell::new(0));
        let fired_in_handler = Rc::clone(&fired);
        region.subscribe(Rc::new(move |_| {
            fired_in_handler.set(fired_in_handler.get() + 1);
        }));

        assert!(region.remove(id));
        assert_eq!(fired.get(), 1);

        // Removing an id that is no longer present is silent.
        assert!(!region.remove(id));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn quiet_insert_and_class_toggles_do_not_notify() {
        let region = Rc::new(PageRegion::new());
        let fired = Rc::new(Cell::new(0));
        let fired_in_handler = Rc::clone(&fired);
        region.subscribe(Rc::new(move |_| {
            fired_in_handler.set(fired_in_handler.get() + 1);
        }));

        region.insert_quiet(Entry::new("placeholder"));
        region.with_entries_mut(|entries| {
            for e in entries.iter_mut() {
                e.add_class("hidden");
            }
        });
        assert_eq!(fired.get(), 0);
        assert_eq!(region.len(), 1);
    }

    #[test]
    fn handlers_can_read_the_region_during_notification() {
        let region = Rc::new(PageRegion::new());
        let seen = Rc::new(Cell::new(0));

        let seen_in_handler = Rc::clone(&seen);
        region.subscribe(Rc::new(move |r: &PageRegion| {
            seen_in_handler.set(r.len());
        }));

        region.append(Entry::new("A"));
        region.append(Entry::new("B"));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn stylesheet_is_inserted_exactly_once() {
        let page = Page::new();
        assert!(page.ensure_stylesheet(".a { display: none; }"));
        assert!(!page.ensure_stylesheet(".a { display: none; }"));
        assert!(page.ensure_stylesheet(".b { display: block; }"));
        assert_eq!(page.stylesheet_count(), 2);
    }

    #[test]
    fn bare_page_has_no_region_or_anchor() {
        let page = Page::new();
        assert!(page.region().is_none());
        assert!(!page.has_anchor());
    }
}
