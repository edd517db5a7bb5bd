//! # boldsift
//!
//! Emphasis-based list filtering for continuously mutating chart pages.
//!
//! Chart pages render long lists where some entries carry a binary visual
//! marker ("bolded") and most don't. boldsift lets the user collapse such a
//! list to just the marked entries (or just the unmarked ones), remembers that
//! choice across page loads, and keeps the filtered view correct while the
//! page keeps mutating underneath it (pagination, lazy loading).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                    │
//! │  - once-per-page assembly, load persisted mode           │
//! │  - routes user selections: apply first, persist after    │
//! └──────────────────────────────────────────────────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌──────────────┐   ┌─────────────────┐   ┌────────────────┐
//! │ Widget       │   │ Filter Engine   │   │ Region Watcher │
//! │ (widget.rs)  │   │ (engine.rs)     │   │ (watch.rs)     │
//! │ presentation │   │ mode state +    │   │ re-triggers    │
//! │ state only   │   │ visibility pass │   │ passes on      │
//! └──────────────┘   └─────────────────┘   │ mutations      │
//!                             │            └────────────────┘
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Page model (page.rs, model.rs, classify.rs)             │
//! │  - entry list owned by the host page, re-read on demand  │
//! │  - classification and visibility via class markers       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The preference store ([`store`]) and the page surface ([`page`]) are the
//! external collaborators; both are injected, never ambient, so the whole
//! pipeline runs against test doubles.
//!
//! ## Concurrency Model
//!
//! Single-threaded and cooperative. Every filter pass runs synchronously
//! inside a change notification or a selection event; the only suspensions
//! are the one awaited preference read at startup and the best-effort
//! preference write after a selection. Entry sets are re-read from the
//! region on every pass; there is no cached snapshot to go stale, at the
//! cost of an O(n) rescan per mutation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boldsift::config::SiftConfig;
//! use boldsift::page::{Page, PageRegion};
//! use boldsift::session::FilterSession;
//! use boldsift::store::fs::FileStore;
//! use std::rc::Rc;
//!
//! let region = Rc::new(PageRegion::new());
//! let page = Page::new().with_region(Rc::clone(&region)).with_anchor();
//! let store = FileStore::user_default()?;
//!
//! let session = FilterSession::start(&page, store, SiftConfig::default()).await;
//! // The host now feeds page mutations into `region`; the session keeps
//! // the filtered view consistent for the page's lifetime.
//! ```

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod page;
pub mod session;
pub mod store;
pub mod styles;
pub mod watch;
pub mod widget;
