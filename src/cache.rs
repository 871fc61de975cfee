//! In-memory cache over the persistence store.
//!
//! Maps tab ids to their toggle state, lazily populated from
//! [`StateStore`] and authoritative once loaded. All mutation flows back
//! through the store so memory and disk never disagree for longer than a
//! single operation.

use crate::mux::{MuxHost, TabId};
use crate::state::ToggleState;
use crate::storage::StateStore;
use anyhow::Result;
use std::collections::HashMap;

/// Per-tab toggle state cache with write-through persistence.
pub struct StateCache {
    entries: HashMap<TabId, ToggleState>,
    store: StateStore,
}

impl StateCache {
    /// Create a cache over the given store
    pub fn new(store: StateStore) -> Self {
        Self {
            entries: HashMap::new(),
            store,
        }
    }

    /// Get the state for a tab. Never fails: a cache miss attempts a
    /// storage load (host-validated) and falls back to the default state,
    /// memoizing whichever it got.
    pub fn get(&mut self, host: &dyn MuxHost, tab: TabId) -> ToggleState {
        if let Some(state) = self.entries.get(&tab) {
            return *state;
        }
        let state = self.store.load(host, tab).unwrap_or_default();
        self.entries.insert(tab, state);
        state
    }

    /// Record a new state for a tab, in memory and on disk.
    ///
    /// Persisting a state with no live toggle pane deletes the tab's file
    /// (see [`StateStore::save`]).
    pub fn put(&mut self, host: &dyn MuxHost, tab: TabId, state: ToggleState) -> Result<()> {
        self.entries.insert(tab, state);
        self.store.save(host, tab, &state)
    }

    /// Reset a tab to the default state, in memory and on disk.
    ///
    /// The in-memory entry is dropped (a fully-reset state is equivalent to
    /// no state at all) and the save-through deletes the tab's file.
    pub fn reset(&mut self, host: &dyn MuxHost, tab: TabId) -> Result<()> {
        self.entries.remove(&tab);
        self.store.save(host, tab, &ToggleState::default())
    }

    /// Drop a tab's in-memory entry without touching storage.
    ///
    /// Used after a removal path that already persisted through
    /// [`StateCache::put`].
    pub fn forget(&mut self, tab: TabId) {
        self.entries.remove(&tab);
    }

    /// Whether a tab currently has an in-memory entry
    pub fn contains(&self, tab: TabId) -> bool {
        self.entries.contains_key(&tab)
    }

    /// Iterate over all cached tab states (for lifecycle scans)
    pub fn iter(&self) -> impl Iterator<Item = (TabId, &ToggleState)> {
        self.entries.iter().map(|(tab, state)| (*tab, state))
    }
}
