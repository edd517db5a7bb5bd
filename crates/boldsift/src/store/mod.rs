//! # Preference Storage
//!
//! The selected filter mode survives across page loads through a small
//! key-value store with asynchronous access, mirroring the userscript value
//! stores this system targets. The [`PreferenceStore`] trait is the seam:
//! it is injected into the session rather than reached through ambient
//! globals, so tests run against [`memory::MemoryStore`] while deployments
//! use [`fs::FileStore`].
//!
//! Values are opaque strings (the mode's stable string form), wrapped in a
//! [`PrefEntry`] envelope that timestamps every write. Reads of a missing
//! key resolve to `None` and callers fall back to the default mode; store
//! failures are contained, never surfaced to the user.
//!
//! The whole system is single-threaded and cooperative, so the trait is
//! `?Send`: implementations are free to use `RefCell` state and futures are
//! awaited on the one logical thread of control.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod fs;
pub mod memory;

/// A stored preference value and when it was last written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefEntry {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl PrefEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: Utc::now(),
        }
    }
}

/// Abstract interface for persisted preferences.
#[async_trait(?Send)]
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
